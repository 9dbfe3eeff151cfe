//! Tapering window functions for curve smoothing.
//!
//! ## Purpose
//!
//! This module provides the symmetric window functions used as convolution
//! kernels by the outlier flagger. The smoothed curve is the series convolved
//! with a normalized window, so the window shape controls how strongly
//! neighbouring samples contribute.
//!
//! ## Design notes
//!
//! * **Sampling**: Windows are sampled at `k = 0..M-1` over their full
//!   support, so both endpoints are included (symmetric, not periodic).
//! * **Normalization**: `coefficients` returns weights scaled to sum to one.
//! * **Degenerate length**: A window of length 1 is `[1]` for every shape.
//!
//! ## Key concepts
//!
//! * **Hann**: The default raised-cosine window; its endpoints are exactly zero.
//! * **Flat**: A moving average.
//!
//! ## Invariants
//!
//! * Windows are symmetric: `w[k] == w[M-1-k]`.
//! * Normalized coefficients sum to one.
//!
//! ## Non-goals
//!
//! * This module does not perform the convolution itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// ============================================================================
// Window Function Enum
// ============================================================================

/// Window function used to smooth a series before computing residuals.
///
/// | Window   | Formula (`0 <= k < M`, `N = M - 1`)                  |
/// |----------|------------------------------------------------------|
/// | Flat     | 1                                                    |
/// | Hann     | 0.5 - 0.5 cos(2 pi k / N)                            |
/// | Hamming  | 0.54 - 0.46 cos(2 pi k / N)                          |
/// | Bartlett | 1 - abs(2k / N - 1)                                  |
/// | Blackman | 0.42 - 0.5 cos(2 pi k / N) + 0.08 cos(4 pi k / N)    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowFunction {
    /// Rectangular window (moving average).
    Flat,

    /// Hann (raised-cosine) window.
    ///
    /// This is the default window.
    #[default]
    Hann,

    /// Hamming window.
    Hamming,

    /// Bartlett (triangular) window with zero endpoints.
    Bartlett,

    /// Blackman window.
    Blackman,
}

impl WindowFunction {
    /// Get the name of the window function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WindowFunction::Flat => "Flat",
            WindowFunction::Hann => "Hann",
            WindowFunction::Hamming => "Hamming",
            WindowFunction::Bartlett => "Bartlett",
            WindowFunction::Blackman => "Blackman",
        }
    }

    /// Evaluate the unnormalized window at sample `k` of a window of length `m`.
    #[inline]
    pub fn sample<T: Float>(&self, k: usize, m: usize) -> T {
        if m <= 1 {
            return T::one();
        }

        let two = T::one() + T::one();
        let denom = T::from(m - 1).unwrap_or_else(T::one);
        let kk = T::from(k).unwrap_or_else(T::zero);
        let phase = two * T::from(PI).unwrap_or_else(T::zero) * kk / denom;
        let c = |v: f64| T::from(v).unwrap_or_else(T::zero);

        match self {
            WindowFunction::Flat => T::one(),
            WindowFunction::Hann => c(0.5) - c(0.5) * phase.cos(),
            WindowFunction::Hamming => c(0.54) - c(0.46) * phase.cos(),
            WindowFunction::Bartlett => {
                if kk <= denom / two {
                    two * kk / denom
                } else {
                    two - two * kk / denom
                }
            }
            WindowFunction::Blackman => {
                c(0.42) - c(0.5) * phase.cos() + c(0.08) * (two * phase).cos()
            }
        }
    }

    /// Build the unnormalized window of length `m`.
    pub fn window<T: Float>(&self, m: usize) -> Vec<T> {
        (0..m).map(|k| self.sample(k, m)).collect()
    }

    /// Build the window of length `m`, scaled so its weights sum to one.
    pub fn coefficients<T: Float>(&self, m: usize) -> Vec<T> {
        let mut w = self.window::<T>(m);
        let sum = w.iter().fold(T::zero(), |acc, &v| acc + v);
        if sum > T::zero() {
            for v in w.iter_mut() {
                *v = *v / sum;
            }
        }
        w
    }
}
