//! Concrete syntax tree construction for builder tests.
//!
//! Trees are built in the elided form (pass-through levels omitted) unless
//! a helper says otherwise; [`full`] wraps an operand in every level of the
//! expression hierarchy.

use vela_ir::{Cst, Rule};

pub fn t(text: &str) -> Cst {
    Cst::terminal(text)
}

pub fn int(text: &str) -> Cst {
    Cst::lexical(Rule::Integer, text)
}

pub fn real(text: &str) -> Cst {
    Cst::lexical(Rule::Real, text)
}

pub fn boolean(text: &str) -> Cst {
    Cst::lexical(Rule::Bool, text)
}

pub fn string(text: &str) -> Cst {
    Cst::lexical(Rule::String, format!("\"{text}\""))
}

pub fn sym(text: &str) -> Cst {
    Cst::lexical(Rule::Symbol, text)
}

pub fn ty(text: &str) -> Cst {
    Cst::lexical(Rule::Type, text)
}

/// `first op operand op operand ...` under `rule`.
pub fn chain(rule: Rule, first: Cst, rest: Vec<(&str, Cst)>) -> Cst {
    let mut children = vec![first];
    for (op, operand) in rest {
        children.push(t(op));
        children.push(operand);
    }
    Cst::rule(rule, children)
}

/// A binary expression at the level its operator belongs to.
pub fn bin(left: Cst, op: &str, right: Cst) -> Cst {
    let rule = match op.to_ascii_lowercase().as_str() {
        "or" => Rule::BooleanExpression,
        "and" => Rule::ConjunctiveExpression,
        "+" | "-" => Rule::AdditiveExpression,
        "*" | "/" => Rule::MultiplicativeExpression,
        "^" => Rule::ExponentiationExpression,
        _ => Rule::RelationalExpression,
    };
    chain(rule, left, vec![(op, right)])
}

pub fn not(operand: Cst) -> Cst {
    Cst::rule(Rule::LogicalNegationExpression, vec![t("not"), operand])
}

pub fn neg(operand: Cst) -> Cst {
    Cst::rule(Rule::UnaryExpression, vec![t("-"), operand])
}

pub fn paren(expr: Cst) -> Cst {
    Cst::rule(
        Rule::Factor,
        vec![t("("), Cst::rule(Rule::Expression, vec![expr]), t(")")],
    )
}

/// `operand` wrapped in every pass-through level from factor up to
/// expression.
pub fn full(operand: Cst) -> Cst {
    [
        Rule::Factor,
        Rule::ExponentiationExpression,
        Rule::UnaryExpression,
        Rule::MultiplicativeExpression,
        Rule::AdditiveExpression,
        Rule::RelationalExpression,
        Rule::LogicalNegationExpression,
        Rule::ConjunctiveExpression,
        Rule::BooleanExpression,
        Rule::Expression,
    ]
    .into_iter()
    .fold(operand, |inner, rule| Cst::rule(rule, vec![inner]))
}

pub fn seq(items: Vec<Cst>) -> Cst {
    Cst::rule(Rule::Sequence, items)
}

pub fn block(items: Vec<Cst>) -> Cst {
    Cst::rule(Rule::Block, vec![t("{"), seq(items), t("}")])
}

pub fn list(items: Vec<Cst>) -> Cst {
    let mut children = vec![t("[")];
    children.extend(items);
    children.push(t("]"));
    Cst::rule(Rule::List, children)
}

pub fn binding(name: &str, value: Cst) -> Cst {
    Cst::rule(Rule::Binding, vec![sym(name), t("<-"), value])
}

pub fn while_loop(condition: Cst, body: Vec<Cst>) -> Cst {
    Cst::rule(Rule::WhileLoop, vec![t("while"), condition, block(body)])
}

fn fundef_children(params: &[(&str, &str)], ret: Option<&str>, body: Vec<Cst>) -> Vec<Cst> {
    let mut children = vec![t("(")];
    for (name, type_name) in params {
        children.push(Cst::rule(
            Rule::FormalParameter,
            vec![sym(name), t(":"), ty(type_name)],
        ));
    }
    children.push(t(")"));
    if let Some(ret) = ret {
        children.push(t(":"));
        children.push(ty(ret));
    }
    children.push(block(body));
    children
}

pub fn named_fundef(name: &str, params: &[(&str, &str)], ret: Option<&str>, body: Vec<Cst>) -> Cst {
    let mut children = vec![sym(name)];
    children.extend(fundef_children(params, ret, body));
    Cst::rule(Rule::NamedFundef, children)
}

pub fn anon_fundef(params: &[(&str, &str)], ret: Option<&str>, body: Vec<Cst>) -> Cst {
    let mut children = vec![t("function")];
    children.extend(fundef_children(params, ret, body));
    Cst::rule(Rule::AnonFundef, children)
}

fn call(funobj: Cst, args: Vec<Cst>) -> Cst {
    let mut children = vec![Cst::rule(Rule::Funobj, vec![funobj]), t("(")];
    children.extend(args);
    children.push(t(")"));
    Cst::rule(Rule::Funcall, children)
}

pub fn call_named(name: &str, args: Vec<Cst>) -> Cst {
    call(sym(name), args)
}

pub fn call_anon(fundef: Cst, args: Vec<Cst>) -> Cst {
    call(fundef, args)
}

pub fn select(arms: Vec<(Cst, Cst)>) -> Cst {
    let mut children = vec![t("select")];
    for (antecedent, consequent) in arms {
        children.push(antecedent);
        children.push(t("->"));
        children.push(Cst::rule(Rule::Consequent, vec![consequent]));
    }
    Cst::rule(Rule::SelectionExpression, children)
}
