//! Tests for binary operator implementations.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use vela_ir::{Operation, Type};
use vela_runtime::{ErrorCategory, EvalError, EvalResult, Operand};

use crate::operators::evaluate_binary;
use crate::EvalConfig;

fn apply(op: Operation, left: impl Into<Operand>, right: impl Into<Operand>) -> EvalResult {
    evaluate_binary(op, &left.into(), &right.into(), &EvalConfig::default())
}

#[test]
fn test_int_operations() {
    assert_eq!(apply(Operation::Add, 2i64, 3i64), Ok(Operand::Integer(5)));
    assert_eq!(apply(Operation::Sub, 5i64, 3i64), Ok(Operand::Integer(2)));
    assert_eq!(apply(Operation::Mul, 2i64, 3i64), Ok(Operand::Integer(6)));
    assert_eq!(apply(Operation::Div, 7i64, 2i64), Ok(Operand::Integer(3)));
    assert_eq!(apply(Operation::Div, -7i64, 2i64), Ok(Operand::Integer(-3)));
    assert_eq!(apply(Operation::Pow, 2i64, 10i64), Ok(Operand::Integer(1024)));
}

#[test]
fn test_int_arithmetic_wraps() {
    assert_eq!(apply(Operation::Add, i64::MAX, 1i64), Ok(Operand::Integer(i64::MIN)));
    assert_eq!(apply(Operation::Mul, i64::MIN, -1i64), Ok(Operand::Integer(i64::MIN)));
    assert_eq!(apply(Operation::Div, i64::MIN, -1i64), Ok(Operand::Integer(i64::MIN)));
}

#[test]
fn test_mixed_operands_widen_to_real() {
    assert_eq!(apply(Operation::Add, 1i64, 2.0), Ok(Operand::Real(3.0)));
    assert_eq!(apply(Operation::Div, 1.0, 4i64), Ok(Operand::Real(0.25)));
    assert_eq!(apply(Operation::Pow, 2i64, 0.5), Ok(Operand::Real(2f64.powf(0.5))));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(apply(Operation::Div, 1i64, 0i64), Err(EvalError::DivisionByZero));
    assert_eq!(apply(Operation::Div, 1.0, 0.0), Err(EvalError::DivisionByZero));
    assert_eq!(apply(Operation::Div, 1i64, 0.0), Err(EvalError::DivisionByZero));
}

#[test]
fn test_integer_pow_with_negative_exponent() {
    assert_eq!(apply(Operation::Pow, 2i64, -1i64), Ok(Operand::Integer(0)));
    assert_eq!(apply(Operation::Pow, 1i64, -5i64), Ok(Operand::Integer(1)));
    assert_eq!(apply(Operation::Pow, -1i64, -3i64), Ok(Operand::Integer(-1)));
    assert_eq!(apply(Operation::Pow, -1i64, -4i64), Ok(Operand::Integer(1)));
    assert_eq!(apply(Operation::Pow, 0i64, -2i64), Err(EvalError::DivisionByZero));
    assert_eq!(apply(Operation::Pow, 7i64, 0i64), Ok(Operand::Integer(1)));
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        apply(Operation::Add, "Del", " Cep"),
        Ok(Operand::from("Del Cep"))
    );
    assert_eq!(
        apply(Operation::Sub, "a", "b"),
        Err(EvalError::OperandMismatch {
            op: Operation::Sub,
            left: Type::String,
            right: Type::String,
        })
    );
}

#[test]
fn test_arithmetic_type_mismatch() {
    let err = apply(Operation::Add, 1i64, "1").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
    assert!(apply(Operation::Mul, true, 2i64).is_err());
    assert!(apply(Operation::Add, Operand::EMPTY_LIST, Operand::EMPTY_LIST).is_err());
}

#[test]
fn test_comparisons() {
    assert_eq!(apply(Operation::LessThan, 2i64, 3i64), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::GreaterThan, 2i64, 3i64), Ok(Operand::Boolean(false)));
    assert_eq!(apply(Operation::GreaterThanOrEqual, 3i64, 3i64), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::LessThanOrEqual, 4i64, 3i64), Ok(Operand::Boolean(false)));
    assert_eq!(apply(Operation::Equal, 2i64, 2.0), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::NotEqual, 2i64, 2.5), Ok(Operand::Boolean(true)));
}

#[test]
fn test_string_comparison_is_lexicographic() {
    assert_eq!(apply(Operation::LessThan, "abc", "abd"), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::GreaterThan, "b", "abc"), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::Equal, "x", "x"), Ok(Operand::Boolean(true)));
}

#[test]
fn test_booleans_support_only_equality() {
    assert_eq!(apply(Operation::Equal, true, true), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::NotEqual, true, false), Ok(Operand::Boolean(true)));
    assert_eq!(
        apply(Operation::LessThan, false, true),
        Err(EvalError::InvalidOperand {
            op: Operation::LessThan,
            found: Type::Boolean,
        })
    );
}

#[test]
fn test_incomparable_types() {
    assert!(apply(Operation::Equal, 1i64, "1").is_err());
    assert!(apply(Operation::Equal, true, 1i64).is_err());
}

#[test]
fn test_nan_is_unordered() {
    assert_eq!(apply(Operation::Equal, f64::NAN, f64::NAN), Ok(Operand::Boolean(false)));
    assert_eq!(apply(Operation::NotEqual, f64::NAN, 1.0), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::LessThanOrEqual, f64::NAN, 1.0), Ok(Operand::Boolean(false)));
}

#[test]
fn test_approximately_equal_uses_relative_tolerance() {
    assert_eq!(
        apply(Operation::ApproximatelyEqual, 1.0, 1.000_000_1),
        Ok(Operand::Boolean(true))
    );
    assert_eq!(
        apply(Operation::ApproximatelyEqual, 1.0, 1.001),
        Ok(Operand::Boolean(false))
    );
    // Large magnitudes scale the tolerance.
    assert_eq!(
        apply(Operation::ApproximatelyEqual, 1.0e9, 1.0e9 + 100.0),
        Ok(Operand::Boolean(true))
    );
    // Near zero the tolerance is absolute.
    assert_eq!(
        apply(Operation::ApproximatelyEqual, 0.0, 1.0e-7),
        Ok(Operand::Boolean(true))
    );
    assert_eq!(apply(Operation::ApproximatelyEqual, 3i64, 3.0), Ok(Operand::Boolean(true)));
}

#[test]
fn test_approximately_equal_honours_configured_tolerance() {
    let strict = EvalConfig {
        approx_tolerance: 1e-12,
        ..EvalConfig::default()
    };
    let result = evaluate_binary(
        Operation::ApproximatelyEqual,
        &Operand::Real(1.0),
        &Operand::Real(1.000_000_1),
        &strict,
    );
    assert_eq!(result, Ok(Operand::Boolean(false)));
}

#[test]
fn test_approximately_equal_rejects_non_numbers() {
    assert!(apply(Operation::ApproximatelyEqual, "a", "a").is_err());
}

#[test]
fn test_membership() {
    let list = Operand::List(vec![Operand::Integer(1), Operand::Integer(2), Operand::Integer(3)]);
    assert_eq!(apply(Operation::In, 2i64, list.clone()), Ok(Operand::Boolean(true)));
    assert_eq!(apply(Operation::In, 4i64, list), Ok(Operand::Boolean(false)));
}

#[test]
fn test_membership_is_tag_aware() {
    let reals = Operand::List(vec![Operand::Real(2.0)]);
    assert_eq!(apply(Operation::In, 2i64, reals), Ok(Operand::Boolean(false)));
    let nested = Operand::List(vec![Operand::List(vec![Operand::from("a")])]);
    assert_eq!(
        apply(Operation::In, Operand::List(vec![Operand::from("a")]), nested),
        Ok(Operand::Boolean(true))
    );
}

#[test]
fn test_membership_requires_list() {
    assert_eq!(
        apply(Operation::In, 2i64, 5i64),
        Err(EvalError::type_mismatch(
            "right operand of `in`",
            Type::List,
            Type::Integer
        ))
    );
}

#[test]
fn test_short_circuit_operators_are_not_strict() {
    let err = apply(Operation::And, true, true).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::MalformedAst);
}

mod proptest_arithmetic {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn integer_arithmetic_wraps_like_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(apply(Operation::Add, a, b), Ok(Operand::Integer(a.wrapping_add(b))));
            prop_assert_eq!(apply(Operation::Sub, a, b), Ok(Operand::Integer(a.wrapping_sub(b))));
            prop_assert_eq!(apply(Operation::Mul, a, b), Ok(Operand::Integer(a.wrapping_mul(b))));
        }

        #[test]
        fn integer_comparisons_agree_with_widened_reals(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            for op in [Operation::LessThan, Operation::Equal, Operation::GreaterThanOrEqual] {
                prop_assert_eq!(apply(op, a, b), apply(op, a, vela_runtime::widen(b)));
            }
        }

        #[test]
        fn approximately_equal_is_symmetric(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            prop_assert_eq!(
                apply(Operation::ApproximatelyEqual, a, b),
                apply(Operation::ApproximatelyEqual, b, a)
            );
        }
    }
}
