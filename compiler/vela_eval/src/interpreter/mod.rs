//! Tree-walking interpreter for VeLa.
//!
//! Evaluation is a synchronous recursive walk: `eval` dispatches on the
//! node's operation and every recursive step goes through
//! `ensure_sufficient_stack`. Helper modules split the special forms:
//!
//! - `control` - sequences, bindings, selection, loops, short-circuit logic
//! - `function_call` - function definition and application
//!
//! Evaluation order is strictly left to right: operands, list elements,
//! sequence items and call arguments. Errors abort the walk and propagate
//! unchanged.

mod builder;
mod control;
mod function_call;

pub use builder::InterpreterBuilder;

use tracing::debug;
use vela_build::{build, BuildOptions, BuilderKind};
use vela_ir::{Ast, Cst, Node, Operation};
use vela_runtime::{Environment, EvalError, EvalResult, Operand};
use vela_stack::ensure_sufficient_stack;

use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{EvalConfig, InterruptHandle, ResultCache, VelaError};

/// A VeLa interpreter bound to a root environment.
///
/// Top-level bindings persist between calls to [`evaluate`](Self::evaluate).
/// A named function bound in the root environment refers back to it; call
/// [`Environment::clear`] on [`env`](Self::env) when discarding an
/// environment that will not be reused.
pub struct Interpreter {
    env: Environment,
    config: EvalConfig,
    interrupt: InterruptHandle,
    build_options: BuildOptions,
    cache: ResultCache,
    /// Number of function calls currently executing.
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with the default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Evaluate `ast` in the root environment.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, ast: &Ast) -> EvalResult {
        ast.validate()?;
        let env = self.env.clone();
        let value = self.eval(ast, &env)?;
        debug!(%value, "evaluated");
        Ok(value)
    }

    /// Evaluate `ast` in a caller-supplied environment, typically a child of
    /// [`env`](Self::env) holding per-evaluation bindings.
    pub fn eval_in(&mut self, ast: &Ast, env: &Environment) -> EvalResult {
        ast.validate()?;
        self.eval(ast, env)
    }

    /// Like [`evaluate`](Self::evaluate), reusing the result of an earlier
    /// evaluation of an identical deterministic tree.
    pub fn evaluate_cached(&mut self, ast: &Ast) -> EvalResult {
        if let Some(value) = self.cache.get(ast) {
            debug!("cache hit");
            return Ok(value.clone());
        }
        let value = self.evaluate(ast)?;
        self.cache.insert(ast, value.clone());
        Ok(value)
    }

    /// Build `tree` with the chosen builder, then evaluate it.
    pub fn run(&mut self, tree: &Cst, kind: BuilderKind) -> Result<Operand, VelaError> {
        let ast = build(tree, kind, &self.build_options)?;
        Ok(self.evaluate(&ast)?)
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// A handle the host can use to interrupt this interpreter.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.interrupt.clone()
    }

    #[inline]
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Evaluate one tree. Recursion point of the walk.
    pub(crate) fn eval(&mut self, ast: &Ast, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| match ast {
            Ast::Literal(leaf) => Ok(Operand::from(&leaf.value)),
            Ast::Symbol(name) => env
                .lookup_name(name)
                .ok_or_else(|| EvalError::UnboundSymbol { name: name.clone() }),
            Ast::Node(node) => self.eval_node(node, env),
        })
    }

    fn eval_node(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let op = node.op();
        match op {
            Operation::Add
            | Operation::Sub
            | Operation::Mul
            | Operation::Div
            | Operation::Pow
            | Operation::Equal
            | Operation::NotEqual
            | Operation::GreaterThan
            | Operation::LessThan
            | Operation::GreaterThanOrEqual
            | Operation::LessThanOrEqual
            | Operation::ApproximatelyEqual
            | Operation::In => {
                let (left, right) = node.pair()?;
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(op, &left, &right, &self.config)
            }
            Operation::Neg | Operation::Not => {
                let operand = self.eval(node.single()?, env)?;
                evaluate_unary(op, &operand)
            }
            Operation::And | Operation::Or => self.eval_short_circuit(node, env),
            Operation::List => node
                .children()
                .iter()
                .map(|child| self.eval(child, env))
                .collect::<EvalResult<Vec<_>>>()
                .map(Operand::List),
            Operation::Sequence => self.eval_sequence(node, env),
            Operation::Bind => self.eval_bind(node, env),
            Operation::Select => self.eval_select(node, env),
            Operation::While => self.eval_while(node, env),
            Operation::Fundef => self.eval_fundef(node, env),
            Operation::Funcall => self.eval_funcall(node, env),
            Operation::Pair => Err(EvalError::malformed(op, "pair outside a selection")),
            Operation::Symbol => Err(EvalError::malformed(op, "symbols must be leaves")),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
