//! Mirror padding for edge-aware smoothing.
//!
//! ## Purpose
//!
//! Convolving a finite series with a window either shrinks the output or,
//! with zero padding, biases it towards zero near the edges. This module
//! extends the series by reflecting it about its first and last samples so
//! the smoother sees plausible context beyond both ends.
//!
//! ## Key concepts
//!
//! * **Reflection**: The edge sample itself is not repeated. For
//!   `x = [a, b, c, d]` and a pad of 2 the left side is `[c, b]` and the
//!   right side is `[c, b]`.
//!
//! ## Invariants
//!
//! * Padding length is `window_length - 1` on each side.
//! * Original data is preserved in the middle of the padded range.
//! * Callers guarantee `window_length <= x.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform in-place modification of input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Reflect `x` about both edges, padding `window_length - 1` samples per side.
///
/// The left pad is `x[window_length-1], ..., x[1]` and the right pad is
/// `x[n-2], ..., x[n-window_length]`.
pub fn reflect_pad<T: Float>(x: &[T], window_length: usize) -> Vec<T> {
    let n = x.len();
    let pad_len = window_length.saturating_sub(1);
    debug_assert!(
        pad_len < n || pad_len == 0,
        "reflect_pad: window_length must not exceed the series length"
    );

    let mut padded = Vec::with_capacity(n + 2 * pad_len);

    // 1. Prepend mirrored head
    for i in (1..=pad_len).rev() {
        padded.push(x[i]);
    }

    // 2. Add original data
    padded.extend_from_slice(x);

    // 3. Append mirrored tail
    for i in 1..=pad_len {
        padded.push(x[n - 1 - i]);
    }

    padded
}
