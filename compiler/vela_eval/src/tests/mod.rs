//! Tests for the operator and intrinsic implementations.
//!
//! Interpreter tests live next to the interpreter in `interpreter/tests.rs`.

mod operators_tests;
mod unary_operators_tests;
