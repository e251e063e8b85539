//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;
use vela_runtime::{EvalError, EvalResult};

/// A flag a host sets, from any thread, to stop a running evaluation.
///
/// The interpreter polls it before each `while` condition test and at each
/// function call, failing with [`EvalError::Interrupted`]. The flag stays set
/// until [`reset`](Self::reset), so every later evaluation fails too.
#[derive(Clone, Debug, Default)]
pub struct InterruptHandle(Arc<AtomicBool>);

impl InterruptHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    #[inline]
    pub(crate) fn check(&self) -> EvalResult<()> {
        if self.is_interrupted() {
            debug!("interrupt observed");
            return Err(EvalError::Interrupted);
        }
        Ok(())
    }
}
