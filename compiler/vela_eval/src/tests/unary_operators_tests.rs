//! Tests for unary operator implementations.

use pretty_assertions::assert_eq;
use vela_ir::{Operation, Type};
use vela_runtime::{EvalError, Operand};

use crate::unary_operators::evaluate_unary;

#[test]
fn test_negation() {
    assert_eq!(
        evaluate_unary(Operation::Neg, &Operand::Integer(5)),
        Ok(Operand::Integer(-5))
    );
    assert_eq!(
        evaluate_unary(Operation::Neg, &Operand::Real(2.5)),
        Ok(Operand::Real(-2.5))
    );
    assert_eq!(
        evaluate_unary(Operation::Neg, &Operand::Integer(i64::MIN)),
        Ok(Operand::Integer(i64::MIN))
    );
}

#[test]
fn test_logical_not() {
    assert_eq!(
        evaluate_unary(Operation::Not, &Operand::Boolean(true)),
        Ok(Operand::Boolean(false))
    );
    assert_eq!(
        evaluate_unary(Operation::Not, &Operand::Boolean(false)),
        Ok(Operand::Boolean(true))
    );
}

#[test]
fn test_invalid_operands() {
    assert_eq!(
        evaluate_unary(Operation::Not, &Operand::Integer(1)),
        Err(EvalError::InvalidOperand {
            op: Operation::Not,
            found: Type::Integer,
        })
    );
    assert_eq!(
        evaluate_unary(Operation::Neg, &Operand::from("x")),
        Err(EvalError::InvalidOperand {
            op: Operation::Neg,
            found: Type::String,
        })
    );
}
