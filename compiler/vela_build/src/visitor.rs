//! Recursive-descent AST construction.
//!
//! Each rule is handled by building its children first and then
//! assembling the rule's node. Recursion depth follows tree depth and is
//! guarded by `ensure_sufficient_stack`.

use tracing::trace;
use vela_ir::{Ast, Cst, Operation, Rule};
use vela_stack::ensure_sufficient_stack;

use crate::shape::{self, rule_children};
use crate::{literal, BuildError, BuildOptions};

pub(crate) struct AstVisitor<'a> {
    options: &'a BuildOptions,
}

impl<'a> AstVisitor<'a> {
    pub(crate) fn new(options: &'a BuildOptions) -> Self {
        AstVisitor { options }
    }

    pub(crate) fn visit(&self, tree: &Cst) -> Result<Ast, BuildError> {
        ensure_sufficient_stack(|| match tree {
            Cst::Rule { rule, children } => self.visit_rule(*rule, children),
            Cst::Terminal { text } => Err(BuildError::malformed(
                Rule::Sequence,
                format!("unexpected terminal `{text}`"),
            )),
        })
    }

    fn visit_rule(&self, rule: Rule, children: &[Cst]) -> Result<Ast, BuildError> {
        let ast = match rule {
            Rule::Sequence => Ast::node(Operation::Sequence, self.visit_children(children)?),
            Rule::List => Ast::node(Operation::List, self.visit_children(children)?),

            Rule::Binding => {
                let (target, value) = shape::two(rule, self.visit_children(children)?)?;
                shape::bind(target, value)?
            }
            Rule::WhileLoop => {
                let (condition, body) = shape::two(rule, self.visit_children(children)?)?;
                shape::while_loop(condition, body)?
            }
            Rule::FormalParameter => {
                let (name, ty) = shape::two(rule, self.visit_children(children)?)?;
                shape::formal_parameter(name, ty)?
            }
            Rule::NamedFundef => shape::named_fundef(self.visit_children(children)?)?,
            Rule::AnonFundef => shape::fundef(rule, None, self.visit_children(children)?)?,
            Rule::SelectionExpression => shape::select(self.visit_children(children)?)?,
            Rule::Funcall => shape::funcall(self.visit_children(children)?)?,
            Rule::Block => shape::block(self.visit_children(children)?)?,

            Rule::Expression | Rule::Consequent | Rule::Factor | Rule::Funobj => {
                shape::pass_through(rule, self.visit_children(children)?)?
            }

            Rule::BooleanExpression
            | Rule::ConjunctiveExpression
            | Rule::RelationalExpression
            | Rule::AdditiveExpression
            | Rule::MultiplicativeExpression
            | Rule::ExponentiationExpression => self.visit_chain(rule, children)?,

            Rule::LogicalNegationExpression | Rule::UnaryExpression => {
                let op = shape::prefix_operator(rule, children)?;
                let operand = shape::pass_through(rule, self.visit_children(children)?)?;
                shape::prefix(op, operand)
            }

            Rule::Integer
            | Rule::Real
            | Rule::Bool
            | Rule::String
            | Rule::Symbol
            | Rule::Type => literal::leaf(rule, shape::lexical_text(rule, children)?, self.options)?,
        };
        Ok(ast)
    }

    fn visit_children(&self, children: &[Cst]) -> Result<Vec<Ast>, BuildError> {
        rule_children(children).map(|child| self.visit(child)).collect()
    }

    fn visit_chain(&self, rule: Rule, children: &[Cst]) -> Result<Ast, BuildError> {
        let (operands, ops) = shape::chain(rule, children)?;
        let operands = operands
            .into_iter()
            .map(|operand| self.visit(operand))
            .collect::<Result<Vec<_>, _>>()?;
        let ast = shape::fold_chain(rule, operands, ops)?;
        trace!(%rule, %ast, "visited chain");
        Ok(ast)
    }
}

#[cfg(test)]
mod tests;
