//! High-level API for series preprocessing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: one fluent builder per
//! operation, and the four one-call functions [`mask_outliers`],
//! [`mask_largeunc`], [`smart_binning`] and [`split_data`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders; the one-call functions cover the common case.
//! * **Validated**: Builder parameters are checked by `build()`, data is
//!   checked when it is passed in.
//! * **Deferred errors**: Setting a parameter twice is reported by `build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder, e.g. `SmartBinningBuilder::new()`.
//! 2. Chain configuration methods (`.interval()`, `.reporter()`, ...).
//! 3. Call `.build()` to validate and obtain the runner.
//! 4. Run it on data (`.fit()`, `.mask()`, `.split()`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{BinningConfig, OutlierConfig, SplitConfig, UncertaintyConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::{BinSummary, Binning, OutlierResult};
#[cfg(feature = "tracing")]
pub use crate::engine::report::TracingReporter;
pub use crate::engine::report::{NoReporter, Reporter};
pub use crate::math::kernel::WindowFunction;
pub use crate::primitives::errors::PrepError;
pub use crate::primitives::interval::Bin;

// ============================================================================
// One-call functions
// ============================================================================

/// Flag points that deviate strongly from a Hann-smoothed version of `x`.
///
/// A point is flagged when its absolute residual exceeds `threshold` times
/// the mean absolute residual. `window_length` must be odd and smaller than
/// `x.len()`.
pub fn mask_outliers<T: Float>(
    x: &[T],
    window_length: usize,
    threshold: T,
) -> Result<Vec<bool>, PrepError> {
    OutlierFlaggerBuilder::new()
        .window_length(window_length)
        .threshold(threshold)
        .build()?
        .mask(x)
}

/// Flag uncertainties larger than `threshold` times their mean.
pub fn mask_largeunc<T: Float>(uncertainties: &[T], threshold: T) -> Result<Vec<bool>, PrepError> {
    UncertaintyFlaggerBuilder::new()
        .threshold(threshold)
        .build()?
        .mask(uncertainties)
}

/// Group sorted timestamps into bins of points close to one another in time.
///
/// Returns the bins as index lists and the indices left out of every bin.
/// Series shorter than two points yield no bins and no unbinned indices.
pub fn smart_binning<T: Float>(
    time: &[T],
    interval: T,
) -> Result<(Vec<Vec<usize>>, Vec<usize>), PrepError> {
    let binning = SmartBinningBuilder::new()
        .interval(interval)
        .build()?
        .fit(time)?;

    Ok((binning.index_groups(), binning.unbinned))
}

/// Split sorted timestamps wherever consecutive points are more than `gap` apart.
pub fn split_data<T: Float>(time: &[T], gap: T) -> Result<Vec<Vec<usize>>, PrepError> {
    GapSplitterBuilder::new().gap(gap).build()?.split(time)
}

// ============================================================================
// Outlier Flagger
// ============================================================================

/// Fluent builder for smoothing-based outlier flagging.
#[derive(Debug, Clone)]
pub struct OutlierFlaggerBuilder<T> {
    /// Smoothing window length (required).
    pub window_length: Option<usize>,

    /// Residual threshold multiplier (required).
    pub threshold: Option<T>,

    /// Window shape (default: Hann).
    pub window_function: Option<WindowFunction>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for OutlierFlaggerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OutlierFlaggerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_length: None,
            threshold: None,
            window_function: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing window length (odd).
    pub fn window_length(mut self, window_length: usize) -> Self {
        if self.window_length.is_some() {
            self.duplicate_param = Some("window_length");
        }
        self.window_length = Some(window_length);
        self
    }

    /// Set the residual threshold multiplier.
    pub fn threshold(mut self, threshold: T) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set the smoothing window shape.
    pub fn window_function(mut self, window_function: WindowFunction) -> Self {
        if self.window_function.is_some() {
            self.duplicate_param = Some("window_function");
        }
        self.window_function = Some(window_function);
        self
    }

    /// Validate the configuration and build the flagger.
    ///
    /// The window length is checked against the series length when data is
    /// passed to the flagger.
    pub fn build(self) -> Result<OutlierFlagger<T>, PrepError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let window_length = Validator::require(self.window_length, "window_length")?;
        let threshold = Validator::require(self.threshold, "threshold")?;
        Validator::validate_threshold(threshold)?;

        Ok(OutlierFlagger {
            config: OutlierConfig {
                window_length,
                threshold,
                window_function: self.window_function.unwrap_or_default(),
            },
        })
    }
}

/// Validated outlier flagger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierFlagger<T> {
    config: OutlierConfig<T>,
}

impl<T: Float> OutlierFlagger<T> {
    /// Smooth `x` and return the full flagging result.
    pub fn fit(&self, x: &[T]) -> Result<OutlierResult<T>, PrepError> {
        self.config.run(x)
    }

    /// Return only the outlier mask of `x`.
    pub fn mask(&self, x: &[T]) -> Result<Vec<bool>, PrepError> {
        Ok(self.config.run(x)?.mask)
    }

    /// Smoothing window length.
    pub fn window_length(&self) -> usize {
        self.config.window_length
    }

    /// Residual threshold multiplier.
    pub fn threshold(&self) -> T {
        self.config.threshold
    }

    /// Smoothing window shape.
    pub fn window_function(&self) -> WindowFunction {
        self.config.window_function
    }
}

// ============================================================================
// Large-Uncertainty Flagger
// ============================================================================

/// Fluent builder for large-uncertainty flagging.
#[derive(Debug, Clone)]
pub struct UncertaintyFlaggerBuilder<T> {
    /// Threshold multiplier of the mean uncertainty (required).
    pub threshold: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for UncertaintyFlaggerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> UncertaintyFlaggerBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            threshold: None,
            duplicate_param: None,
        }
    }

    /// Set the threshold multiplier.
    pub fn threshold(mut self, threshold: T) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Validate the configuration and build the flagger.
    pub fn build(self) -> Result<UncertaintyFlagger<T>, PrepError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let threshold = Validator::require(self.threshold, "threshold")?;
        Validator::validate_threshold(threshold)?;

        Ok(UncertaintyFlagger {
            config: UncertaintyConfig { threshold },
        })
    }
}

/// Validated large-uncertainty flagger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyFlagger<T> {
    config: UncertaintyConfig<T>,
}

impl<T: Float> UncertaintyFlagger<T> {
    /// Return the large-uncertainty mask.
    pub fn mask(&self, uncertainties: &[T]) -> Result<Vec<bool>, PrepError> {
        self.config.run(uncertainties)
    }

    /// Threshold multiplier.
    pub fn threshold(&self) -> T {
        self.config.threshold
    }
}

// ============================================================================
// Smart Binning
// ============================================================================

/// Fluent builder for adaptive binning.
#[derive(Debug, Clone)]
pub struct SmartBinningBuilder<T, R = NoReporter> {
    /// Time span within which points are considered close (required).
    pub interval: Option<T>,

    /// Diagnostics sink (default: discard).
    pub reporter: R,

    /// Whether a reporter was configured explicitly.
    #[doc(hidden)]
    pub reporter_set: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmartBinningBuilder<T, NoReporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmartBinningBuilder<T, NoReporter> {
    /// Create a new builder that discards diagnostics.
    pub fn new() -> Self {
        Self {
            interval: None,
            reporter: NoReporter,
            reporter_set: false,
            duplicate_param: None,
        }
    }
}

impl<T: Float, R: Reporter> SmartBinningBuilder<T, R> {
    /// Set the closeness interval.
    pub fn interval(mut self, interval: T) -> Self {
        if self.interval.is_some() {
            self.duplicate_param = Some("interval");
        }
        self.interval = Some(interval);
        self
    }

    /// Set the sink that receives the bin-size summary of each call.
    pub fn reporter<R2: Reporter>(self, reporter: R2) -> SmartBinningBuilder<T, R2> {
        let duplicate_param = if self.reporter_set {
            Some("reporter")
        } else {
            self.duplicate_param
        };

        SmartBinningBuilder {
            interval: self.interval,
            reporter,
            reporter_set: true,
            duplicate_param,
        }
    }

    /// Validate the configuration and build the binning engine.
    pub fn build(self) -> Result<SmartBinning<T, R>, PrepError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let interval = Validator::require(self.interval, "interval")?;
        Validator::validate_interval(interval)?;

        Ok(SmartBinning {
            config: BinningConfig { interval },
            reporter: self.reporter,
        })
    }
}

/// Validated adaptive binning engine.
#[derive(Debug, Clone)]
pub struct SmartBinning<T, R = NoReporter> {
    config: BinningConfig<T>,
    reporter: R,
}

impl<T: Float, R: Reporter> SmartBinning<T, R> {
    /// Bin sorted timestamps.
    pub fn fit(&self, time: &[T]) -> Result<Binning, PrepError> {
        self.config.run(time, &self.reporter)
    }

    /// Closeness interval.
    pub fn interval(&self) -> T {
        self.config.interval
    }
}

// ============================================================================
// Gap Splitter
// ============================================================================

/// Fluent builder for gap-based splitting.
#[derive(Debug, Clone)]
pub struct GapSplitterBuilder<T> {
    /// Largest step between consecutive timestamps within a segment (required).
    pub gap: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GapSplitterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GapSplitterBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            gap: None,
            duplicate_param: None,
        }
    }

    /// Set the gap length.
    pub fn gap(mut self, gap: T) -> Self {
        if self.gap.is_some() {
            self.duplicate_param = Some("gap");
        }
        self.gap = Some(gap);
        self
    }

    /// Validate the configuration and build the splitter.
    pub fn build(self) -> Result<GapSplitter<T>, PrepError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let gap = Validator::require(self.gap, "gap")?;
        Validator::validate_gap(gap)?;

        Ok(GapSplitter {
            config: SplitConfig { gap },
        })
    }
}

/// Validated gap splitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSplitter<T> {
    config: SplitConfig<T>,
}

impl<T: Float> GapSplitter<T> {
    /// Split sorted timestamps into index groups.
    pub fn split(&self, time: &[T]) -> Result<Vec<Vec<usize>>, PrepError> {
        Ok(self
            .segments(time)?
            .into_iter()
            .map(|segment| segment.indices())
            .collect())
    }

    /// Split sorted timestamps into index ranges.
    pub fn segments(&self, time: &[T]) -> Result<Vec<Bin>, PrepError> {
        self.config.run(time)
    }

    /// Gap length.
    pub fn gap(&self) -> T {
        self.config.gap
    }
}
