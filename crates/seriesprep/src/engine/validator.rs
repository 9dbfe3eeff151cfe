//! Input validation for preprocessing parameters and data.
//!
//! ## Purpose
//!
//! This module checks every caller-supplied argument before any computation
//! starts, so operations either fail up front or run to completion.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PrepError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for preprocessing parameters and input data.
///
/// All methods return `Result<(), PrepError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), PrepError> {
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(PrepError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a finite value series of at least two points.
    ///
    /// A single point admits no window shorter than the series.
    pub fn validate_series<T: Float>(x: &[T]) -> Result<(), PrepError> {
        match x.len() {
            0 => return Err(PrepError::EmptyInput),
            1 => return Err(PrepError::TooFewPoints { got: 1, min: 2 }),
            _ => {}
        }
        Self::validate_finite(x, "x")
    }

    /// Validate a timestamp series: finite and sorted non-decreasingly.
    ///
    /// Empty and single-point series are valid.
    pub fn validate_time<T: Float>(time: &[T]) -> Result<(), PrepError> {
        Self::validate_finite(time, "time")?;

        if let Some(pos) = time.windows(2).position(|w| w[1] < w[0]) {
            return Err(PrepError::UnsortedTime { index: pos + 1 });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing window length against the series length.
    ///
    /// # Notes
    ///
    /// * The window must be odd so the trimmed convolution realigns with the
    ///   input exactly.
    /// * The window must be shorter than the series so mirror padding never
    ///   reaches past the opposite edge.
    pub fn validate_window_length(window_length: usize, n: usize) -> Result<(), PrepError> {
        if window_length == 0 || window_length.is_multiple_of(2) || window_length >= n {
            return Err(PrepError::InvalidWindowLength {
                got: window_length,
                n,
            });
        }
        Ok(())
    }

    /// Validate a flagging threshold multiplier.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), PrepError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(PrepError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the binning interval length.
    pub fn validate_interval<T: Float>(interval: T) -> Result<(), PrepError> {
        if !interval.is_finite() || interval <= T::zero() {
            return Err(PrepError::InvalidInterval(
                interval.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the gap length used for splitting.
    pub fn validate_gap<T: Float>(gap: T) -> Result<(), PrepError> {
        if !gap.is_finite() || gap <= T::zero() {
            return Err(PrepError::InvalidGap(gap.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PrepError> {
        if let Some(param) = duplicate_param {
            return Err(PrepError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Unwrap a required builder parameter.
    pub fn require<V>(value: Option<V>, parameter: &'static str) -> Result<V, PrepError> {
        value.ok_or(PrepError::MissingParameter { parameter })
    }
}
