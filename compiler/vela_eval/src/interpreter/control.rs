//! Special forms that steer evaluation: short-circuit logic, sequences,
//! bindings, selection and loops.

use tracing::trace;
use vela_ir::{Ast, Node, Operation, Type};
use vela_runtime::{Environment, EvalError, EvalResult, Operand};

use super::Interpreter;

impl Interpreter {
    /// `and` / `or`: the right operand is evaluated only when the left one
    /// does not decide the result.
    pub(super) fn eval_short_circuit(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let op = node.op();
        let (left, right) = node.pair()?;
        let left = self.eval_logical_operand(op, left, env)?;
        let decided = match op {
            Operation::And => !left,
            Operation::Or => left,
            _ => return Err(EvalError::malformed(op, "not a short-circuit operator")),
        };
        if decided {
            trace!(%op, "short-circuit");
            return Ok(Operand::Boolean(left));
        }
        self.eval_logical_operand(op, right, env).map(Operand::Boolean)
    }

    fn eval_logical_operand(&mut self, op: Operation, ast: &Ast, env: &Environment) -> EvalResult<bool> {
        let value = self.eval(ast, env)?;
        value.as_bool().ok_or_else(|| EvalError::InvalidOperand {
            op,
            found: value.get_type(),
        })
    }

    /// Evaluate `ast`, requiring a BOOLEAN.
    fn eval_condition(&mut self, ast: &Ast, env: &Environment, context: &str) -> EvalResult<bool> {
        let value = self.eval(ast, env)?;
        value
            .as_bool()
            .ok_or_else(|| EvalError::type_mismatch(context, Type::Boolean, value.get_type()))
    }

    /// Items in order, in the same frame; the value of the last one.
    pub(super) fn eval_sequence(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let Some((last, init)) = node.children().split_last() else {
            return Err(EvalError::EmptySequence);
        };
        for item in init {
            self.eval(item, env)?;
        }
        self.eval(last, env)
    }

    /// Bind in the current frame. The result is whatever the name is bound
    /// to afterwards, which is the earlier value if the name was taken.
    pub(super) fn eval_bind(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let (target, value) = node.pair()?;
        let name = target
            .as_symbol()
            .ok_or_else(|| EvalError::malformed(Operation::Bind, "binding target is not a symbol"))?;
        let value = self.eval(value, env)?;
        if env.bind_name(name.clone(), value.clone()) {
            return Ok(value);
        }
        env.lookup_name(name)
            .ok_or_else(|| EvalError::UnboundSymbol { name: name.clone() })
    }

    /// The consequent of the first true antecedent, tested in order.
    pub(super) fn eval_select(&mut self, node: &Node, env: &Environment) -> EvalResult {
        for arm in node.children() {
            let arm = arm
                .as_node()
                .filter(|arm| arm.op() == Operation::Pair)
                .ok_or_else(|| EvalError::malformed(Operation::Select, format!("expected PAIR, found {arm}")))?;
            let (antecedent, consequent) = arm.pair()?;
            if self.eval_condition(antecedent, env, "selection antecedent")? {
                return self.eval(consequent, env);
            }
        }
        Err(EvalError::NoMatchingSelection)
    }

    /// Loop while the condition holds. The body runs in the enclosing frame
    /// and its value is discarded; the loop itself yields the empty list.
    pub(super) fn eval_while(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let (condition, body) = node.pair()?;
        let mut iterations: u64 = 0;
        loop {
            self.interrupt.check()?;
            if !self.eval_condition(condition, env, "while condition")? {
                break;
            }
            if body.op() == Some(Operation::Sequence) {
                // An empty body is allowed here, unlike an empty sequence
                // whose value is needed.
                for item in body.children() {
                    self.eval(item, env)?;
                }
            } else {
                self.eval(body, env)?;
            }
            iterations += 1;
        }
        trace!(iterations, "loop finished");
        Ok(Operand::EMPTY_LIST)
    }
}
