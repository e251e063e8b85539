//! VeLa AST builders.
//!
//! Turns the concrete syntax tree handed over by the parser into the
//! [`Ast`] the evaluator consumes. Two builders are provided:
//!
//! - the **listener** builder reacts to [`walk`](vela_ir::walk) callbacks and
//!   assembles nodes on an explicit stack;
//! - the **visitor** builder recurses over the tree directly.
//!
//! Both accept the same trees and produce structurally identical ASTs.
//! Chains of same-precedence operators nest to the left, except
//! exponentiation, which nests to the right.

mod errors;
mod listener;
mod literal;
mod shape;
mod visitor;

#[cfg(test)]
mod test_helpers;

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use vela_ir::{walk, Ast, Cst, Rule};

pub use errors::BuildError;
pub use literal::parse_real;

/// Options affecting how literal text is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Decimal separator of REAL literals in the script's locale.
    pub decimal_separator: char,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            decimal_separator: '.',
        }
    }
}

/// Which builder to construct an AST with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    Listener,
    #[default]
    Visitor,
}

impl FromStr for BuilderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "listener" => Ok(BuilderKind::Listener),
            "visitor" => Ok(BuilderKind::Visitor),
            other => Err(format!("unknown builder `{other}` (expected listener or visitor)")),
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuilderKind::Listener => "listener",
            BuilderKind::Visitor => "visitor",
        })
    }
}

/// Build an AST with the chosen builder.
pub fn build(tree: &Cst, kind: BuilderKind, options: &BuildOptions) -> Result<Ast, BuildError> {
    match kind {
        BuilderKind::Listener => build_with_listener(tree, options),
        BuilderKind::Visitor => build_with_visitor(tree, options),
    }
}

/// Build an AST by walking `tree` with the stack-based listener.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_with_listener(tree: &Cst, options: &BuildOptions) -> Result<Ast, BuildError> {
    let root = root_rule(tree)?;
    let mut listener = listener::AstListener::new(options);
    walk(&mut listener, tree)?;
    let ast = listener.finish(root)?;
    debug!(%ast, "built");
    Ok(ast)
}

/// Build an AST by visiting `tree` recursively.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_with_visitor(tree: &Cst, options: &BuildOptions) -> Result<Ast, BuildError> {
    root_rule(tree)?;
    let ast = visitor::AstVisitor::new(options).visit(tree)?;
    debug!(%ast, "built");
    Ok(ast)
}

fn root_rule(tree: &Cst) -> Result<Rule, BuildError> {
    tree.rule_kind()
        .ok_or_else(|| BuildError::malformed(Rule::Sequence, "tree root is a terminal"))
}
