//! Node assembly shared by both builders.
//!
//! The builders differ in how they traverse a concrete tree; once the child
//! ASTs of a rule are in hand, both assemble the rule's node here.

use vela_ir::{Ast, Cst, Name, Operation, Rule};

use crate::BuildError;

/// Rule-node children, skipping terminals.
pub(crate) fn rule_children(children: &[Cst]) -> impl Iterator<Item = &Cst> {
    children.iter().filter(|c| c.rule_kind().is_some())
}

/// The text of the single terminal inside a lexical rule.
pub(crate) fn lexical_text(rule: Rule, children: &[Cst]) -> Result<&str, BuildError> {
    match children {
        [Cst::Terminal { text }] => Ok(text),
        _ => Err(BuildError::malformed(rule, "expected a single terminal")),
    }
}

/// Operands and operators of a dyadic chain `operand (op operand)*`.
pub(crate) fn chain(rule: Rule, children: &[Cst]) -> Result<(Vec<&Cst>, Vec<Operation>), BuildError> {
    let mut operands = Vec::with_capacity(children.len() / 2 + 1);
    let mut ops = Vec::with_capacity(children.len() / 2);
    for (index, child) in children.iter().enumerate() {
        match (index % 2, child) {
            (0, Cst::Rule { .. }) => operands.push(child),
            (1, Cst::Terminal { text }) => ops.push(binary_operator(rule, text)?),
            _ => {
                return Err(BuildError::malformed(
                    rule,
                    format!("operands and operators do not alternate at position {index}"),
                ));
            }
        }
    }
    if operands.len() != ops.len() + 1 {
        return Err(BuildError::malformed(rule, "chain ends with an operator"));
    }
    Ok((operands, ops))
}

/// The binary operation an operator terminal denotes within `rule`.
pub(crate) fn binary_operator(rule: Rule, text: &str) -> Result<Operation, BuildError> {
    let unknown = || BuildError::UnknownOperator {
        rule,
        text: text.to_string(),
    };
    let op = Operation::from_binary_symbol(text.trim()).ok_or_else(unknown)?;
    let allowed = match rule {
        Rule::BooleanExpression => op == Operation::Or,
        Rule::ConjunctiveExpression => op == Operation::And,
        Rule::RelationalExpression => matches!(
            op,
            Operation::Equal
                | Operation::NotEqual
                | Operation::GreaterThan
                | Operation::LessThan
                | Operation::GreaterThanOrEqual
                | Operation::LessThanOrEqual
                | Operation::ApproximatelyEqual
                | Operation::In
        ),
        Rule::AdditiveExpression => matches!(op, Operation::Add | Operation::Sub),
        Rule::MultiplicativeExpression => matches!(op, Operation::Mul | Operation::Div),
        Rule::ExponentiationExpression => op == Operation::Pow,
        _ => false,
    };
    if allowed {
        Ok(op)
    } else {
        Err(unknown())
    }
}

/// Nest a chain of same-precedence operations.
///
/// Exponentiation nests to the right, everything else to the left.
pub(crate) fn fold_chain(rule: Rule, operands: Vec<Ast>, ops: Vec<Operation>) -> Result<Ast, BuildError> {
    if operands.len() != ops.len() + 1 {
        return Err(BuildError::malformed(rule, "operand count does not match operators"));
    }

    if rule == Rule::ExponentiationExpression {
        let mut operands = operands.into_iter().rev();
        let Some(mut acc) = operands.next() else {
            return Err(BuildError::malformed(rule, "empty chain"));
        };
        for (left, op) in operands.zip(ops.into_iter().rev()) {
            acc = Ast::binary(op, left, acc);
        }
        Ok(acc)
    } else {
        let mut operands = operands.into_iter();
        let Some(mut acc) = operands.next() else {
            return Err(BuildError::malformed(rule, "empty chain"));
        };
        for (op, right) in ops.into_iter().zip(operands) {
            acc = Ast::binary(op, acc, right);
        }
        Ok(acc)
    }
}

/// The optional prefix operator of a `not`/`-` rule.
pub(crate) fn prefix_operator(rule: Rule, children: &[Cst]) -> Result<Option<Operation>, BuildError> {
    let (keyword, op) = match rule {
        Rule::LogicalNegationExpression => ("not", Operation::Not),
        Rule::UnaryExpression => ("-", Operation::Neg),
        _ => return Err(BuildError::malformed(rule, "not a prefix rule")),
    };
    let mut terminals = children.iter().filter_map(Cst::text);
    match (terminals.next(), terminals.next()) {
        (None, _) => Ok(None),
        (Some(text), None) if text.trim().eq_ignore_ascii_case(keyword) => Ok(Some(op)),
        (Some(text), _) => Err(BuildError::UnknownOperator {
            rule,
            text: text.to_string(),
        }),
    }
}

pub(crate) fn prefix(op: Option<Operation>, operand: Ast) -> Ast {
    match op {
        Some(op) => Ast::unary(op, operand),
        None => operand,
    }
}

pub(crate) fn bind(target: Ast, value: Ast) -> Result<Ast, BuildError> {
    if target.as_symbol().is_none() {
        return Err(BuildError::malformed(Rule::Binding, format!("cannot bind to {target}")));
    }
    Ok(Ast::binary(Operation::Bind, target, value))
}

pub(crate) fn while_loop(condition: Ast, body: Ast) -> Result<Ast, BuildError> {
    if body.op() != Some(Operation::Sequence) {
        return Err(BuildError::malformed(Rule::WhileLoop, "body is not a block"));
    }
    Ok(Ast::binary(Operation::While, condition, body))
}

pub(crate) fn formal_parameter(name: Ast, ty: Ast) -> Result<Ast, BuildError> {
    if name.as_symbol().is_none() || ty.as_symbol().is_none() {
        return Err(BuildError::malformed(
            Rule::FormalParameter,
            "expected a name and a type",
        ));
    }
    Ok(Ast::node(Operation::Pair, vec![name, ty]))
}

/// A function definition from its formal parameters, optional return type
/// and body, in that order.
pub(crate) fn fundef(rule: Rule, name: Option<Name>, parts: Vec<Ast>) -> Result<Ast, BuildError> {
    let ast = match name {
        Some(name) => Ast::named_node(Operation::Fundef, name, parts),
        None => Ast::node(Operation::Fundef, parts),
    };
    if let Some(node) = ast.as_node() {
        node.fundef_parts()
            .map_err(|e| BuildError::malformed(rule, e.detail))?;
    }
    Ok(ast)
}

/// Split the leading function name off a named definition's parts.
pub(crate) fn named_fundef(mut parts: Vec<Ast>) -> Result<Ast, BuildError> {
    if parts.is_empty() {
        return Err(BuildError::malformed(Rule::NamedFundef, "missing function name"));
    }
    let name = match parts.remove(0) {
        Ast::Symbol(name) => name,
        other => {
            return Err(BuildError::malformed(
                Rule::NamedFundef,
                format!("{other} is not a function name"),
            ));
        }
    };
    fundef(Rule::NamedFundef, Some(name), parts)
}

/// Pair up alternating antecedents and consequents.
pub(crate) fn select(items: Vec<Ast>) -> Result<Ast, BuildError> {
    if items.len() % 2 != 0 {
        return Err(BuildError::malformed(
            Rule::SelectionExpression,
            "antecedent without consequent",
        ));
    }
    let mut pairs = Vec::with_capacity(items.len() / 2);
    let mut items = items.into_iter();
    while let (Some(antecedent), Some(consequent)) = (items.next(), items.next()) {
        pairs.push(Ast::node(Operation::Pair, vec![antecedent, consequent]));
    }
    Ok(Ast::node(Operation::Select, pairs))
}

/// A call from the function object followed by the actual parameters.
pub(crate) fn funcall(mut items: Vec<Ast>) -> Result<Ast, BuildError> {
    if items.is_empty() {
        return Err(BuildError::malformed(Rule::Funcall, "missing function"));
    }
    match items.remove(0) {
        Ast::Symbol(name) => Ok(Ast::named_node(Operation::Funcall, name, items)),
        callee @ Ast::Node(_)
            if callee.op() == Some(Operation::Fundef)
                && callee.as_node().is_some_and(|n| n.token().is_none()) =>
        {
            items.insert(0, callee);
            Ok(Ast::node(Operation::Funcall, items))
        }
        other => Err(BuildError::malformed(
            Rule::Funcall,
            format!("{other} is not callable"),
        )),
    }
}

/// A block body; an absent sequence is an empty one.
pub(crate) fn block(body: Vec<Ast>) -> Result<Ast, BuildError> {
    let mut body = body.into_iter();
    match (body.next(), body.next()) {
        (None, _) => Ok(Ast::node(Operation::Sequence, vec![])),
        (Some(seq), None) if seq.op() == Some(Operation::Sequence) => Ok(seq),
        (Some(expr), None) => Ok(Ast::node(Operation::Sequence, vec![expr])),
        (Some(_), Some(_)) => Err(BuildError::malformed(Rule::Block, "expected one sequence")),
    }
}

/// A rule that contributes its only child unchanged.
pub(crate) fn pass_through(rule: Rule, children: Vec<Ast>) -> Result<Ast, BuildError> {
    let mut children = children.into_iter();
    match (children.next(), children.next()) {
        (Some(only), None) => Ok(only),
        _ => Err(BuildError::malformed(rule, "expected exactly one operand")),
    }
}

/// Exactly two built children.
pub(crate) fn two(rule: Rule, children: Vec<Ast>) -> Result<(Ast, Ast), BuildError> {
    let mut children = children.into_iter();
    match (children.next(), children.next(), children.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(BuildError::malformed(rule, "expected exactly two operands")),
    }
}
