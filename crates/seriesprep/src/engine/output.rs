//! Output types for preprocessing operations.
//!
//! ## Purpose
//!
//! This module defines the values handed back to callers: the outlier fit
//! (`OutlierResult`), the binning outcome (`Binning`) and the bin-size summary
//! (`BinSummary`) passed to reporters.
//!
//! ## Design notes
//!
//! * **Transient**: Outputs are built once per call and never mutated by the
//!   crate afterwards.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Single "no bins" shape**: A call that finds nothing returns a
//!   `Binning` with an empty `bins` vector, never a different type.
//!
//! ## Invariants
//!
//! * All per-point vectors in `OutlierResult` have the input's length.
//! * `Binning::bins` are disjoint, ascending, and together with
//!   `Binning::unbinned` cover `0..n` exactly once (for `n >= 2`).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple summaries.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::WindowFunction;
use crate::math::scaling::median_inplace;
use crate::primitives::interval::Bin;

// ============================================================================
// Outlier Result
// ============================================================================

/// Outcome of smoothing-based outlier flagging.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierResult<T> {
    /// Smoothed reference curve.
    pub smoothed: Vec<T>,

    /// Absolute residuals `|x - smoothed|`.
    pub residuals: Vec<T>,

    /// Mean of the residuals.
    pub mean_residual: T,

    /// Residuals strictly above this value are outliers.
    pub cutoff: T,

    /// Window length used for smoothing.
    pub window_length: usize,

    /// Window function used for smoothing.
    pub window_function: WindowFunction,

    /// `true` where the point is an outlier.
    pub mask: Vec<bool>,
}

impl<T: Float> OutlierResult<T> {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    /// Check if the series was empty.
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Indices flagged as outliers, ascending.
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect()
    }

    /// Number of flagged points.
    pub fn outlier_count(&self) -> usize {
        self.mask.iter().filter(|&&flag| flag).count()
    }

    /// Largest residual, if any.
    pub fn max_residual(&self) -> Option<T> {
        self.residuals
            .iter()
            .copied()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }
}

impl<T: Float + Display + Debug> Display for OutlierResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:   {}", self.len())?;
        writeln!(
            f,
            "  Window:        {} ({})",
            self.window_length,
            self.window_function.name()
        )?;
        writeln!(f, "  Mean residual: {}", self.mean_residual)?;
        writeln!(f, "  Cutoff:        {}", self.cutoff)?;
        writeln!(f, "  Outliers:      {}", self.outlier_count())?;
        writeln!(f)?;

        writeln!(f, "Flagged Points:")?;
        writeln!(f, "{:>8} {:>12} {:>12}", "Index", "Smoothed", "Residual")?;
        writeln!(f, "{:-<34}", "")?;
        for i in self.outlier_indices() {
            writeln!(
                f,
                "{:>8} {:>12.6} {:>12.6}",
                i, self.smoothed[i], self.residuals[i]
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Bin Summary
// ============================================================================

/// Size statistics of a set of bins.
#[derive(Debug, Clone, PartialEq)]
pub struct BinSummary {
    /// Number of bins.
    pub bins: usize,

    /// Fewest points in a bin.
    pub min: usize,

    /// Median number of points per bin.
    pub median: f64,

    /// Mean number of points per bin.
    pub mean: f64,

    /// Most points in a bin.
    pub max: usize,
}

impl BinSummary {
    /// Summarize bin sizes; `None` if there are no bins.
    pub fn from_sizes(sizes: &[usize]) -> Option<Self> {
        let min = *sizes.iter().min()?;
        let max = *sizes.iter().max()?;

        let mut scratch: Vec<f64> = sizes.iter().map(|&s| s as f64).collect();
        let mean = scratch.iter().sum::<f64>() / scratch.len() as f64;
        let median = median_inplace(&mut scratch);

        Some(Self {
            bins: sizes.len(),
            min,
            median,
            mean,
            max,
        })
    }
}

impl Display for BinSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{} bins found.", self.bins)?;
        writeln!(f, "time points per bin:")?;
        writeln!(f, "  Min:    {:8}", self.min)?;
        writeln!(f, "  Median: {:8.0}", self.median)?;
        writeln!(f, "  Mean:   {:8.0}", self.mean)?;
        write!(f, "  Max:    {:8}", self.max)
    }
}

// ============================================================================
// Binning
// ============================================================================

/// Outcome of adaptive binning.
///
/// For series shorter than two points nothing is computed: both `bins` and
/// `unbinned` are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binning {
    /// Bins in ascending index order.
    pub bins: Vec<Bin>,

    /// Indices too isolated to join any bin, ascending.
    pub unbinned: Vec<usize>,
}

impl Binning {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if no bin was found.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Position of the bin containing `index`, if any.
    pub fn bin_of(&self, index: usize) -> Option<usize> {
        let pos = self.bins.partition_point(|bin| bin.stop() <= index);
        self.bins
            .get(pos)
            .filter(|bin| bin.contains(index))
            .map(|_| pos)
    }

    /// Size statistics of the bins; `None` if no bin was found.
    pub fn summary(&self) -> Option<BinSummary> {
        let sizes: Vec<usize> = self.bins.iter().map(Bin::len).collect();
        BinSummary::from_sizes(&sizes)
    }

    /// Materialize every bin as its list of indices.
    pub fn index_groups(&self) -> Vec<Vec<usize>> {
        self.bins.iter().map(Bin::indices).collect()
    }
}

impl Display for Binning {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.summary() {
            Some(summary) => writeln!(f, "{summary}")?,
            None => writeln!(f, "0 bins found.")?,
        }
        writeln!(f, "  Unbinned: {:6}", self.unbinned.len())?;
        writeln!(f)?;

        writeln!(f, "{:>6} {:>8} {:>8} {:>6}", "Bin", "Start", "Stop", "Size")?;
        writeln!(f, "{:-<31}", "")?;
        for (i, bin) in self.bins.iter().enumerate() {
            writeln!(
                f,
                "{:>6} {:>8} {:>8} {:>6}",
                i,
                bin.start(),
                bin.stop(),
                bin.len()
            )?;
        }

        Ok(())
    }
}
