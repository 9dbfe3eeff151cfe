//! Discrete linear convolution.
//!
//! Only the "valid" mode is provided: output samples are computed where the
//! kernel fully overlaps the signal, so no implicit zero padding is applied.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Convolve `signal` with `kernel`, keeping only fully overlapping positions.
///
/// The output has `signal.len() - kernel.len() + 1` samples, where
/// `out[k] = sum_j kernel[j] * signal[k + m - 1 - j]`. Returns an empty vector
/// when the kernel is empty or longer than the signal.
pub fn convolve_valid<T: Float>(signal: &[T], kernel: &[T]) -> Vec<T> {
    let m = kernel.len();
    if m == 0 || m > signal.len() {
        return Vec::new();
    }

    let out_len = signal.len() - m + 1;
    let mut out = Vec::with_capacity(out_len);

    for k in 0..out_len {
        let mut acc = T::zero();
        for (j, &w) in kernel.iter().enumerate() {
            acc = acc + w * signal[k + m - 1 - j];
        }
        out.push(acc);
    }

    out
}
