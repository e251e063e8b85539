//! Flag parsing for `vela run` and `vela ast`.

use vela_build::{parse_real, BuildOptions, BuilderKind};
use vela_eval::{EvalConfig, HostValue, RealFormat};
use vela_ir::Type;

/// A `--bind=NAME=LITERAL` flag, resolved to a typed host value.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub name: String,
    pub ty: Type,
    pub value: HostValue,
}

/// Everything `vela run` was asked to do.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub path: String,
    pub builder: BuilderKind,
    pub config: EvalConfig,
    pub build_options: BuildOptions,
    pub bindings: Vec<Binding>,
    pub json: bool,
}

/// Parse the arguments following `vela run`.
///
/// Flags may appear before or after the path. Bindings are resolved after
/// all flags are read, so `--decimal-separator` applies to them wherever
/// it appears.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut builder = BuilderKind::default();
    let mut config = EvalConfig::default();
    let mut build_options = BuildOptions::default();
    let mut raw_bindings = Vec::new();
    let mut json = false;

    for arg in args {
        if let Some(kind) = arg.strip_prefix("--builder=") {
            builder = kind.parse()?;
        } else if let Some(places) = arg.strip_prefix("--precision=") {
            let places = places
                .parse()
                .map_err(|_| format!("invalid precision '{places}'"))?;
            config.real_format = RealFormat::new(places);
        } else if let Some(tolerance) = arg.strip_prefix("--tolerance=") {
            config.approx_tolerance = match tolerance.parse::<f64>() {
                Ok(t) if t.is_finite() && t >= 0.0 => t,
                _ => return Err(format!("invalid tolerance '{tolerance}'")),
            };
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let depth = depth
                .parse()
                .map_err(|_| format!("invalid call depth '{depth}'"))?;
            config.max_call_depth = Some(depth);
        } else if let Some(separator) = arg.strip_prefix("--decimal-separator=") {
            build_options.decimal_separator = single_char(separator)?;
        } else if let Some(binding) = arg.strip_prefix("--bind=") {
            raw_bindings.push(binding);
        } else if arg == "--no-intrinsics" {
            config.install_intrinsics = false;
        } else if arg == "--json" {
            json = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or("missing tree file path")?;
    let bindings = raw_bindings
        .into_iter()
        .map(|b| parse_binding(b, &build_options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RunOptions {
        path,
        builder,
        config,
        build_options,
        bindings,
        json,
    })
}

/// Parse the arguments following `vela ast`: a path and an optional builder.
pub fn parse_ast_options(args: &[String]) -> Result<(String, BuilderKind), String> {
    let mut path = None;
    let mut builder = BuilderKind::default();
    for arg in args {
        if let Some(kind) = arg.strip_prefix("--builder=") {
            builder = kind.parse()?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    Ok((path.ok_or("missing tree file path")?, builder))
}

/// Parse `NAME=LITERAL`.
///
/// The literal is read the way the builder reads script literals: an
/// integer, then a real, then a boolean (`true`, `#t`, any case). Text in
/// double quotes, or anything else, is a string.
pub fn parse_binding(text: &str, options: &BuildOptions) -> Result<Binding, String> {
    let Some((name, literal)) = text.split_once('=') else {
        return Err(format!("binding '{text}' is not of the form NAME=VALUE"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("binding '{text}' has no name"));
    }

    let (ty, value) = if let Ok(n) = literal.trim().parse::<i64>() {
        (Type::Integer, HostValue::Integer(n))
    } else if let Ok(x) = parse_real(literal, options) {
        (Type::Real, HostValue::Real(x))
    } else if let Some(b) = parse_bool(literal) {
        (Type::Boolean, HostValue::Boolean(b))
    } else {
        let content = literal
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(literal);
        (Type::String, HostValue::Str(content.to_string()))
    };

    Ok(Binding {
        name: name.to_string(),
        ty,
        value,
    })
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_uppercase().as_str() {
        "TRUE" | "#T" => Some(true),
        "FALSE" | "#F" => Some(false),
        _ => None,
    }
}

fn single_char(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("decimal separator must be one character, got '{text}'")),
    }
}
