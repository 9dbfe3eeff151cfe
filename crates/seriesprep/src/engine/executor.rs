//! Execution engine for preprocessing operations.
//!
//! ## Purpose
//!
//! This module ties validation, the algorithms layer and the output types
//! together. Each configuration struct runs one operation end to end:
//! validate, compute, assemble the result.
//!
//! ## Design notes
//!
//! * Validation always happens before any computation (fail fast).
//! * Configurations are plain values; the API builders construct them.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Outputs are positionally aligned with the inputs.
//! * The binning reporter is called at most once per run.
//!
//! ## Non-goals
//!
//! * This module does not provide the fluent builder API.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::binning::{partition, uncovered};
use crate::algorithms::flagging::flag_above_mean;
use crate::algorithms::smoothing::{absolute_residuals, smooth};
use crate::algorithms::splitting::split_at_gaps;
use crate::engine::output::{Binning, OutlierResult};
use crate::engine::report::Reporter;
use crate::engine::validator::Validator;
use crate::math::kernel::WindowFunction;
use crate::primitives::errors::PrepError;
use crate::primitives::interval::Bin;

// ============================================================================
// Outlier Flagging
// ============================================================================

/// Configuration for smoothing-based outlier flagging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierConfig<T> {
    /// Smoothing window length (odd, shorter than the series).
    pub window_length: usize,

    /// Residual multiple of the mean residual above which a point is flagged.
    pub threshold: T,

    /// Window shape used for smoothing.
    pub window_function: WindowFunction,
}

impl<T: Float> OutlierConfig<T> {
    /// Smooth `x`, compute residuals and flag outliers.
    pub fn run(&self, x: &[T]) -> Result<OutlierResult<T>, PrepError> {
        Validator::validate_threshold(self.threshold)?;
        Validator::validate_series(x)?;
        Validator::validate_window_length(self.window_length, x.len())?;

        let smoothed = smooth(x, self.window_length, self.window_function);
        let residuals = absolute_residuals(x, &smoothed);
        let flags = flag_above_mean(&residuals, self.threshold);

        let result = OutlierResult {
            smoothed,
            residuals,
            mean_residual: flags.mean,
            cutoff: flags.cutoff,
            window_length: self.window_length,
            window_function: self.window_function,
            mask: flags.mask,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            points = result.len(),
            window_length = self.window_length,
            window = self.window_function.name(),
            outliers = result.outlier_count(),
            "outlier flagging finished"
        );

        Ok(result)
    }
}

// ============================================================================
// Large-Uncertainty Flagging
// ============================================================================

/// Configuration for large-uncertainty flagging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyConfig<T> {
    /// Multiple of the mean uncertainty above which a point is flagged.
    pub threshold: T,
}

impl<T: Float> UncertaintyConfig<T> {
    /// Flag uncertainties above `threshold * mean(uncertainties)`.
    ///
    /// An empty input yields an empty mask.
    pub fn run(&self, uncertainties: &[T]) -> Result<Vec<bool>, PrepError> {
        Validator::validate_threshold(self.threshold)?;
        Validator::validate_finite(uncertainties, "uncertainties")?;

        Ok(flag_above_mean(uncertainties, self.threshold).mask)
    }
}

// ============================================================================
// Adaptive Binning
// ============================================================================

/// Configuration for adaptive binning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinningConfig<T> {
    /// Time span within which points are considered close.
    pub interval: T,
}

impl<T: Float> BinningConfig<T> {
    /// Bin `time` and report the bin-size summary to `reporter`.
    pub fn run<R: Reporter>(&self, time: &[T], reporter: &R) -> Result<Binning, PrepError> {
        Validator::validate_interval(self.interval)?;
        Validator::validate_time(time)?;

        let n = time.len();
        if n < 2 {
            return Ok(Binning::default());
        }

        let intervals = partition(time, self.interval);
        let unbinned = uncovered(n, &intervals);
        let binning = Binning {
            bins: intervals.into_iter().map(Bin::from).collect(),
            unbinned,
        };

        if let Some(summary) = binning.summary() {
            reporter.report(&summary);
        }

        Ok(binning)
    }
}

// ============================================================================
// Gap Splitting
// ============================================================================

/// Configuration for gap-based splitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig<T> {
    /// Steps between consecutive timestamps larger than this start a new segment.
    pub gap: T,
}

impl<T: Float> SplitConfig<T> {
    /// Split `time` into contiguous index segments.
    pub fn run(&self, time: &[T]) -> Result<Vec<Bin>, PrepError> {
        Validator::validate_gap(self.gap)?;
        Validator::validate_time(time)?;

        Ok(split_at_gaps(time, self.gap)
            .into_iter()
            .map(Bin::from)
            .collect())
    }
}
