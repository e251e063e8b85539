//! Unary operator implementations for the evaluator.

use vela_ir::Operation;
use vela_runtime::{EvalError, EvalResult, Operand};

/// Apply `NEG` or `NOT` to an evaluated operand.
pub(crate) fn evaluate_unary(op: Operation, operand: &Operand) -> EvalResult {
    match (op, operand) {
        (Operation::Neg, Operand::Integer(n)) => Ok(Operand::Integer(n.wrapping_neg())),
        (Operation::Neg, Operand::Real(x)) => Ok(Operand::Real(-x)),
        (Operation::Not, Operand::Boolean(b)) => Ok(Operand::Boolean(!b)),
        (Operation::Neg | Operation::Not, other) => Err(EvalError::InvalidOperand {
            op,
            found: other.get_type(),
        }),
        _ => Err(EvalError::malformed(op, "not a unary operator")),
    }
}
