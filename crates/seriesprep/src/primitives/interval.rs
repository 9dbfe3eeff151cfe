//! Index ranges over a series.
//!
//! This module provides the half-open `Interval` used while searching for
//! bins and the `Bin` handed back to callers once an interval is selected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::Range;

// Half-open index range `[start, stop)` over a series.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    // First covered index.
    pub start: usize,

    // One past the last covered index.
    pub stop: usize,
}

impl Interval {
    // Create a new interval. Callers guarantee `start < stop`.
    #[inline]
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start < stop, "Interval::new: start must be below stop");
        Self { start, stop }
    }

    // Number of covered indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    // Move the interval by `offset` positions to the right.
    #[inline]
    pub fn shift(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            stop: self.stop + offset,
        }
    }

    // The interval as a standard range, for slicing.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

/// A contiguous run of series indices: a bin from adaptive binning, or a
/// segment from gap splitting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bin {
    start: usize,
    stop: usize,
}

impl Bin {
    /// First index in the bin.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index in the bin.
    #[inline]
    pub fn stop(&self) -> usize {
        self.stop
    }

    /// Number of points in the bin.
    #[inline]
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    /// Check if the bin covers no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `index` falls inside the bin.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.stop
    }

    /// Iterate over the covered indices in ascending order.
    #[inline]
    pub fn iter(&self) -> Range<usize> {
        self.start..self.stop
    }

    /// Materialize the covered indices.
    pub fn indices(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl From<Interval> for Bin {
    fn from(interval: Interval) -> Self {
        Self {
            start: interval.start,
            stop: interval.stop,
        }
    }
}

impl IntoIterator for Bin {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
