//! Relative threshold flagging.
//!
//! ## Purpose
//!
//! Both flaggers in this crate share one rule: a value is flagged when it
//! exceeds a multiple of the mean of its own sequence. The outlier flagger
//! applies it to smoothing residuals, the large-uncertainty flagger to the
//! raw uncertainties.
//!
//! ## Design notes
//!
//! * **Self-calibrating**: The scale is the arithmetic mean of the same
//!   sequence, so no global noise floor is needed.
//! * **Strict comparison**: Values equal to the cutoff are not flagged.
//!
//! ## Invariants
//!
//! * The mask has the same length as the input.
//! * A constant sequence is never flagged (nothing exceeds its own mean
//!   for thresholds of at least one).
//!
//! ## Non-goals
//!
//! * This module does not compute residuals.
//! * This module does not validate the threshold.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::mean;

/// Cutoff and mask produced by [`flag_above_mean`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdFlags<T> {
    /// Mean of the flagged sequence.
    pub mean: T,

    /// `threshold * mean`; values strictly above it are flagged.
    pub cutoff: T,

    /// `true` where the value exceeds the cutoff.
    pub mask: Vec<bool>,
}

/// Flag every value strictly greater than `threshold * mean(values)`.
pub fn flag_above_mean<T: Float>(values: &[T], threshold: T) -> ThresholdFlags<T> {
    let mean = mean(values);
    let cutoff = threshold * mean;
    let mask = values.iter().map(|&v| v > cutoff).collect();

    ThresholdFlags { mean, cutoff, mask }
}
