//! Errors of the whole build-then-evaluate pipeline.

use thiserror::Error;
use vela_build::BuildError;
use vela_runtime::EvalError;

/// Failure of [`Interpreter::run`](crate::Interpreter::run).
///
/// Build errors mean the script itself is wrong; evaluation errors are
/// failures while running a well-formed script.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum VelaError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl VelaError {
    #[inline]
    pub fn is_build_error(&self) -> bool {
        matches!(self, VelaError::Build(_))
    }

    /// The pipeline stage that failed: `"build"` or `"runtime"`.
    pub fn phase(&self) -> &'static str {
        match self {
            VelaError::Build(_) => "build",
            VelaError::Eval(_) => "runtime",
        }
    }

    /// Name of the error kind, e.g. `NumberFormatError` or `ArityError`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            VelaError::Build(BuildError::NumberFormat { .. }) => "NumberFormatError",
            VelaError::Build(_) => "SyntaxError",
            VelaError::Eval(e) => e.category().name(),
        }
    }
}
