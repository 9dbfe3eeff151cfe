//! Window smoothing and residuals for outlier detection.
//!
//! ## Purpose
//!
//! This module produces the smoothed reference curve an outlier is measured
//! against. Slow trends survive the smoothing, so only fast local deviations
//! leave large residuals.
//!
//! ## Design notes
//!
//! * **Edges**: The series is mirror-padded by `window_length - 1` samples
//!   per side before convolving, so edge samples see a full window.
//! * **Alignment**: The "valid" convolution of the padded series has
//!   `n + window_length - 1` samples; `window_length / 2` are trimmed from
//!   each end to realign it with the input.
//!
//! ## Key concepts
//!
//! 1. Reflect-pad the series.
//! 2. Convolve with the normalized window.
//! 3. Trim back to length `n`.
//! 4. Residual = `|x - smoothed|`.
//!
//! ## Invariants
//!
//! * `window_length` is odd and smaller than the series length.
//! * Smoothed and residual sequences have the input's length.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (see `engine::validator`).
//! * This module does not decide which residuals are outliers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::reflect_pad;
use crate::math::convolution::convolve_valid;
use crate::math::kernel::WindowFunction;

/// Smooth `x` with a normalized window of length `window_length`.
pub fn smooth<T: Float>(x: &[T], window_length: usize, window: WindowFunction) -> Vec<T> {
    let n = x.len();
    if n == 0 || window_length == 0 {
        return x.to_vec();
    }

    let padded = reflect_pad(x, window_length);
    let kernel = window.coefficients::<T>(window_length);
    let full = convolve_valid(&padded, &kernel);

    let trim = window_length / 2;
    full[trim..trim + n].to_vec()
}

/// Absolute residuals `|x[i] - smoothed[i]|`.
pub fn absolute_residuals<T: Float>(x: &[T], smoothed: &[T]) -> Vec<T> {
    x.iter()
        .zip(smoothed)
        .map(|(&xi, &si)| (xi - si).abs())
        .collect()
}
