//! Stack-based AST construction driven by walk callbacks.
//!
//! Every rule leaves exactly one entry on the stack when it exits, so a rule
//! with `n` rule children finds their ASTs as the top `n` entries. Variadic
//! rules instead push a sentinel on entry and collect everything above it on
//! exit. The sentinel is a private stack entry and never reaches an AST.

use tracing::trace;
use vela_ir::{Ast, Cst, CstListener, Operation, Rule};

use crate::shape::{self, rule_children};
use crate::{literal, BuildError, BuildOptions};

enum StackEntry {
    Sentinel,
    Ast(Ast),
}

pub(crate) struct AstListener<'a> {
    options: &'a BuildOptions,
    stack: Vec<StackEntry>,
}

impl<'a> AstListener<'a> {
    pub(crate) fn new(options: &'a BuildOptions) -> Self {
        AstListener {
            options,
            stack: Vec::new(),
        }
    }

    /// The finished tree. The stack must hold exactly one AST.
    pub(crate) fn finish(mut self, root: Rule) -> Result<Ast, BuildError> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(StackEntry::Ast(ast)), true) => Ok(ast),
            (Some(StackEntry::Sentinel), _) => {
                Err(BuildError::malformed(root, "unterminated variadic rule"))
            }
            _ => Err(BuildError::malformed(
                root,
                format!("walk left {} stack entries", self.stack.len() + 1),
            )),
        }
    }

    /// Whether `rule` collects a variable number of children via a sentinel.
    fn uses_sentinel(rule: Rule) -> bool {
        matches!(
            rule,
            Rule::Sequence
                | Rule::NamedFundef
                | Rule::AnonFundef
                | Rule::SelectionExpression
                | Rule::Funcall
                | Rule::List
        )
    }

    fn push(&mut self, ast: Ast) {
        self.stack.push(StackEntry::Ast(ast));
    }

    /// Pop the top `count` ASTs, returned in push order.
    fn pop_n(&mut self, rule: Rule, count: usize) -> Result<Vec<Ast>, BuildError> {
        if self.stack.len() < count {
            return Err(BuildError::malformed(rule, "missing operands"));
        }
        let start = self.stack.len() - count;
        self.stack
            .drain(start..)
            .map(|entry| match entry {
                StackEntry::Ast(ast) => Ok(ast),
                StackEntry::Sentinel => Err(BuildError::malformed(rule, "unexpected sentinel")),
            })
            .collect()
    }

    /// Pop everything above the nearest sentinel, and the sentinel itself.
    fn pop_to_sentinel(&mut self, rule: Rule) -> Result<Vec<Ast>, BuildError> {
        let mut items = Vec::new();
        loop {
            match self.stack.pop() {
                Some(StackEntry::Ast(ast)) => items.push(ast),
                Some(StackEntry::Sentinel) => break,
                None => return Err(BuildError::malformed(rule, "missing sentinel")),
            }
        }
        items.reverse();
        Ok(items)
    }

    fn reduce(&mut self, rule: Rule, children: &[Cst]) -> Result<Ast, BuildError> {
        if Self::uses_sentinel(rule) {
            let items = self.pop_to_sentinel(rule)?;
            return match rule {
                Rule::Sequence => Ok(Ast::node(Operation::Sequence, items)),
                Rule::List => Ok(Ast::node(Operation::List, items)),
                Rule::NamedFundef => shape::named_fundef(items),
                Rule::AnonFundef => shape::fundef(rule, None, items),
                Rule::SelectionExpression => shape::select(items),
                Rule::Funcall => shape::funcall(items),
                _ => Err(BuildError::malformed(rule, "not a variadic rule")),
            };
        }

        if rule.is_lexical() {
            let text = shape::lexical_text(rule, children)?;
            return literal::leaf(rule, text, self.options);
        }

        if rule.is_dyadic() {
            let (operands, ops) = shape::chain(rule, children)?;
            let operands = self.pop_n(rule, operands.len())?;
            return shape::fold_chain(rule, operands, ops);
        }

        let operands = self.pop_n(rule, rule_children(children).count())?;
        match rule {
            Rule::Binding => {
                let (target, value) = shape::two(rule, operands)?;
                shape::bind(target, value)
            }
            Rule::WhileLoop => {
                let (condition, body) = shape::two(rule, operands)?;
                shape::while_loop(condition, body)
            }
            Rule::FormalParameter => {
                let (name, ty) = shape::two(rule, operands)?;
                shape::formal_parameter(name, ty)
            }
            Rule::Block => shape::block(operands),
            Rule::LogicalNegationExpression | Rule::UnaryExpression => {
                let op = shape::prefix_operator(rule, children)?;
                Ok(shape::prefix(op, shape::pass_through(rule, operands)?))
            }
            _ => shape::pass_through(rule, operands),
        }
    }
}

impl CstListener for AstListener<'_> {
    type Error = BuildError;

    fn enter_rule(&mut self, rule: Rule, _children: &[Cst]) -> Result<(), BuildError> {
        if Self::uses_sentinel(rule) {
            self.stack.push(StackEntry::Sentinel);
        }
        Ok(())
    }

    fn exit_rule(&mut self, rule: Rule, children: &[Cst]) -> Result<(), BuildError> {
        let ast = self.reduce(rule, children)?;
        trace!(%rule, %ast, depth = self.stack.len(), "reduced");
        self.push(ast);
        Ok(())
    }
}
