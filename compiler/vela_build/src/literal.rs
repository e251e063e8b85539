//! Leaves: literal constants, symbols and type names.
//!
//! Literal text is parsed as soon as the leaf is built, so a malformed
//! number is a build error rather than an evaluation error.

use vela_ir::{Ast, Literal, Name, Rule, Type};

use crate::{BuildError, BuildOptions};

pub(crate) fn integer(text: &str) -> Result<Ast, BuildError> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|e| BuildError::number_format(text, e))?;
    Ok(Ast::literal(text, Literal::Integer(value)))
}

pub(crate) fn real(text: &str, options: &BuildOptions) -> Result<Ast, BuildError> {
    let value = parse_real(text, options)?;
    Ok(Ast::literal(text, Literal::Real(value)))
}

/// Parse REAL literal text.
///
/// Surrounding whitespace and one leading `+` are ignored, the locale
/// decimal separator stands for the point and the exponent marker may be
/// either case. Anything beyond a single decimal numeral is rejected.
pub fn parse_real(text: &str, options: &BuildOptions) -> Result<f64, BuildError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut normalized = String::with_capacity(unsigned.len());
    for c in unsigned.chars() {
        match c {
            c if c == options.decimal_separator => normalized.push('.'),
            '.' => return Err(BuildError::number_format(text, "unexpected `.`")),
            'e' => normalized.push('E'),
            c => normalized.push(c),
        }
    }

    if !is_decimal_numeral(&normalized) {
        return Err(BuildError::number_format(text, "not a decimal number"));
    }
    normalized
        .parse::<f64>()
        .map_err(|e| BuildError::number_format(text, e))
}

/// `-? digits [. digits] [E [+-] digits]`, with at least one mantissa digit.
fn is_decimal_numeral(text: &str) -> bool {
    let text = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match text.split_once('E') {
        Some((m, e)) => (m, Some(e)),
        None => (text, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || whole.len() + fraction.len() == 0 {
        return false;
    }

    match exponent {
        None => true,
        Some(e) => {
            let digits = e.strip_prefix(&['+', '-'][..]).unwrap_or(e);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

pub(crate) fn boolean(text: &str) -> Result<Ast, BuildError> {
    let token = text.trim().to_uppercase();
    let value = match token.as_str() {
        "TRUE" | "#T" => true,
        "FALSE" | "#F" => false,
        _ => {
            return Err(BuildError::malformed(
                Rule::Bool,
                format!("`{text}` is not a boolean"),
            ));
        }
    };
    Ok(Ast::literal(token, Literal::Boolean(value)))
}

pub(crate) fn string(text: &str) -> Ast {
    let content = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    Ast::literal(content, Literal::Str(content.to_string()))
}

pub(crate) fn symbol(text: &str) -> Result<Ast, BuildError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BuildError::malformed(Rule::Symbol, "empty symbol"));
    }
    Ok(Ast::Symbol(Name::new(text)))
}

/// A type name, stored as a symbol leaf carrying the canonical name.
pub(crate) fn type_name(text: &str) -> Result<Ast, BuildError> {
    let ty = Type::from_name(text).ok_or_else(|| BuildError::UnknownType(text.to_string()))?;
    Ok(Ast::Symbol(Name::new(ty.name())))
}

/// Build the leaf for a lexical rule from its terminal text.
pub(crate) fn leaf(rule: Rule, text: &str, options: &BuildOptions) -> Result<Ast, BuildError> {
    match rule {
        Rule::Integer => integer(text),
        Rule::Real => real(text, options),
        Rule::Bool => boolean(text),
        Rule::String => Ok(string(text)),
        Rule::Symbol => symbol(text),
        Rule::Type => type_name(text),
        _ => Err(BuildError::malformed(rule, "not a lexical rule")),
    }
}
