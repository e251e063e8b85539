//! VeLa Eval - tree-walking evaluator for the VStar expression Language.
//!
//! # Architecture
//!
//! - [`Interpreter`]: evaluates an [`Ast`](vela_ir::Ast) against an
//!   [`Environment`], one recursive step per node
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - [`intrinsics`]: the built-in function library bound into the root frame
//! - [`InterruptHandle`]: cooperative cancellation, polled at loop back-edges
//!   and call boundaries
//! - [`ResultCache`]: per-interpreter memo of deterministic subtrees
//!
//! # Re-exports
//!
//! The runtime types a host needs are re-exported from `vela_runtime`:
//! `Operand`, `Environment`, `FunctionValue`, `HostValue`, `EvalError`,
//! `EvalResult`.

mod cache;
mod config;
pub mod errors;
pub mod interpreter;
pub mod intrinsics;
mod interrupt;
mod operators;
mod unary_operators;

pub use cache::ResultCache;
pub use config::EvalConfig;
pub use errors::VelaError;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use interrupt::InterruptHandle;

pub use vela_runtime::{
    Environment, ErrorCategory, EvalError, EvalResult, FunctionValue, HostValue, Operand,
    RealFormat,
};

#[cfg(test)]
mod tests;
