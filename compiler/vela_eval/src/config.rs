//! Interpreter configuration.

use vela_runtime::RealFormat;

/// Settings fixed for the lifetime of an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, PartialEq)]
pub struct EvalConfig {
    /// Tolerance of `=~`.
    ///
    /// Two numbers are approximately equal when
    /// `|a - b| <= approx_tolerance * max(1, |a|, |b|)`: an absolute bound
    /// near zero, a relative one for larger magnitudes.
    pub approx_tolerance: f64,
    /// Rendering of REAL values converted to STRING.
    pub real_format: RealFormat,
    /// Maximum nesting of function calls. `None` leaves recursion bounded
    /// only by available memory.
    pub max_call_depth: Option<usize>,
    /// Bind the intrinsic library into the root environment.
    pub install_intrinsics: bool,
}

impl EvalConfig {
    pub const DEFAULT_APPROX_TOLERANCE: f64 = 1e-6;
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            approx_tolerance: Self::DEFAULT_APPROX_TOLERANCE,
            real_format: RealFormat::default(),
            max_call_depth: None,
            install_intrinsics: true,
        }
    }
}
