//! Stack growth for deeply nested TRUMP programs.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! nesting level of the source. A program such as `((((...))))` or a
//! recursive `FUNCTION` can therefore exhaust the native stack long before
//! it exhausts memory. Every recursive entry point wraps its body in
//! [`ensure_sufficient_stack`], which switches to a fresh heap-allocated
//! segment when the remaining stack drops under the red zone.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
