//! Binary operator implementations.
//!
//! Direct enum dispatch on the operation, then on the operand types.
//! `and`/`or` short-circuit and are evaluated by the interpreter; every
//! operator here receives both operands already evaluated.
//!
//! Numeric operands share a type before the operator applies: INTEGER when
//! both are INTEGER, REAL otherwise. INTEGER arithmetic wraps on overflow.

use std::cmp::Ordering;

use vela_ir::{Operation, Type};
use vela_runtime::{EvalError, EvalResult, Operand};

use crate::EvalConfig;

/// Apply a strict binary operator.
pub(crate) fn evaluate_binary(
    op: Operation,
    left: &Operand,
    right: &Operand,
    config: &EvalConfig,
) -> EvalResult {
    match op {
        Operation::Add | Operation::Sub | Operation::Mul | Operation::Div | Operation::Pow => {
            eval_arithmetic(op, left, right)
        }
        Operation::Equal
        | Operation::NotEqual
        | Operation::GreaterThan
        | Operation::LessThan
        | Operation::GreaterThanOrEqual
        | Operation::LessThanOrEqual => eval_comparison(op, left, right),
        Operation::ApproximatelyEqual => {
            eval_approximately_equal(left, right, config.approx_tolerance)
        }
        Operation::In => eval_membership(left, right),
        _ => Err(EvalError::malformed(op, "not a strict binary operator")),
    }
}

fn eval_arithmetic(op: Operation, left: &Operand, right: &Operand) -> EvalResult {
    match (left, right) {
        (Operand::Integer(a), Operand::Integer(b)) => eval_int_binary(*a, *b, op),
        (Operand::Str(a), Operand::Str(b)) if op == Operation::Add => {
            Ok(Operand::Str(format!("{a}{b}")))
        }
        _ => match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => eval_real_binary(a, b, op),
            _ => Err(operand_mismatch(op, left, right)),
        },
    }
}

fn eval_int_binary(a: i64, b: i64, op: Operation) -> EvalResult {
    let value = match op {
        Operation::Add => a.wrapping_add(b),
        Operation::Sub => a.wrapping_sub(b),
        Operation::Mul => a.wrapping_mul(b),
        Operation::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.wrapping_div(b)
        }
        Operation::Pow => int_pow(a, b)?,
        _ => return Err(EvalError::malformed(op, "not an arithmetic operator")),
    };
    Ok(Operand::Integer(value))
}

fn eval_real_binary(a: f64, b: f64, op: Operation) -> EvalResult {
    let value = match op {
        Operation::Add => a + b,
        Operation::Sub => a - b,
        Operation::Mul => a * b,
        Operation::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operation::Pow => a.powf(b),
        _ => return Err(EvalError::malformed(op, "not an arithmetic operator")),
    };
    Ok(Operand::Real(value))
}

/// INTEGER exponentiation. A negative exponent truncates toward zero, as
/// integer division would.
fn int_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return match base {
            0 => Err(EvalError::DivisionByZero),
            1 => Ok(1),
            -1 if exponent % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Ok(0),
        };
    }

    let mut result: i64 = 1;
    let mut square = base;
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.wrapping_mul(square);
        }
        square = square.wrapping_mul(square);
        remaining >>= 1;
    }
    Ok(result)
}

fn eval_comparison(op: Operation, left: &Operand, right: &Operand) -> EvalResult {
    let ordering = match (left, right) {
        (Operand::Integer(a), Operand::Integer(b)) => Some(a.cmp(b)),
        (Operand::Str(a), Operand::Str(b)) => Some(a.cmp(b)),
        (Operand::Boolean(a), Operand::Boolean(b)) => {
            return match op {
                Operation::Equal => Ok(Operand::Boolean(a == b)),
                Operation::NotEqual => Ok(Operand::Boolean(a != b)),
                _ => Err(EvalError::InvalidOperand {
                    op,
                    found: Type::Boolean,
                }),
            };
        }
        _ => match (left.as_real(), right.as_real()) {
            // NaN is unordered: only `<>` holds.
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => return Err(operand_mismatch(op, left, right)),
        },
    };

    let result = match op {
        Operation::Equal => ordering == Some(Ordering::Equal),
        Operation::NotEqual => ordering != Some(Ordering::Equal),
        Operation::GreaterThan => ordering == Some(Ordering::Greater),
        Operation::LessThan => ordering == Some(Ordering::Less),
        Operation::GreaterThanOrEqual => {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        }
        Operation::LessThanOrEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        _ => return Err(EvalError::malformed(op, "not a comparison operator")),
    };
    Ok(Operand::Boolean(result))
}

fn eval_approximately_equal(left: &Operand, right: &Operand, tolerance: f64) -> EvalResult {
    let (Some(a), Some(b)) = (left.as_real(), right.as_real()) else {
        return Err(operand_mismatch(Operation::ApproximatelyEqual, left, right));
    };
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    Ok(Operand::Boolean((a - b).abs() <= tolerance * scale))
}

/// Membership by operand equality, so `2 in [2.0]` is false.
fn eval_membership(item: &Operand, list: &Operand) -> EvalResult {
    match list {
        Operand::List(items) => Ok(Operand::Boolean(items.contains(item))),
        other => Err(EvalError::type_mismatch(
            "right operand of `in`",
            Type::List,
            other.get_type(),
        )),
    }
}

#[cold]
fn operand_mismatch(op: Operation, left: &Operand, right: &Operand) -> EvalError {
    EvalError::OperandMismatch {
        op,
        left: left.get_type(),
        right: right.get_type(),
    }
}
