//! Stack growth for deeply nested VeLa programs.
//!
//! Every VeLa stage is a recursive tree walk: the CST walker feeding the
//! listener builder, the visitor builder, and the evaluator. Scripts typed
//! into a filter box are small, but generated model functions and long
//! `select` chains can nest far deeper than the default thread stack allows.
//! Each recursive step goes through [`ensure_sufficient_stack`], which grows
//! the stack on a fresh segment when the remaining space runs low.
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
