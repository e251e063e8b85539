//! VeLa runtime - values, environments and evaluation errors.
//!
//! These types live together because they refer to each other: a function
//! [`Operand`] holds a [`Closure`], a closure captures the [`Environment`] it
//! was defined in, and an environment maps names to operands.
//!
//! The evaluator itself lives in `vela_eval`; this crate has no knowledge of
//! how trees are walked.

mod environment;
mod errors;
mod format;
mod function;
mod host;
mod operand;

pub use environment::Environment;
pub use errors::{ErrorCategory, EvalError, EvalResult};
pub use format::RealFormat;
pub use function::{Closure, FunctionValue, Intrinsic, IntrinsicFn};
pub use host::HostValue;
pub use operand::{widen, Operand};
