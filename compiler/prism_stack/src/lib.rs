//! Stack growth for deeply nested Ruby source.
//!
//! Ruby programs can nest parentheses, blocks, string interpolation and
//! heredocs arbitrarily deep. The grammar is recursive descent, so every
//! nesting level costs native stack. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] lets the parser accept pathological input
//! without overflowing.
//!
//! On native targets the `stacker` crate grows the stack on demand. On
//! `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_statement(&mut self) -> NodeId {
///     ensure_sufficient_stack(|| self.parse_statement_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` has no stack switching; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
