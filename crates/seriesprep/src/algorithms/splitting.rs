//! Splitting a series at large temporal gaps.
//!
//! A new segment starts wherever consecutive timestamps are more than `gap`
//! apart. Segments are contiguous, ordered and together cover every index.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::interval::Interval;

/// Split sorted `time` into segments separated by steps larger than `gap`.
///
/// Returns no segments for an empty series.
pub fn split_at_gaps<T: Float>(time: &[T], gap: T) -> Vec<Interval> {
    let n = time.len();
    let mut segments = Vec::new();
    if n == 0 {
        return segments;
    }

    let mut start = 0;
    for i in 1..n {
        if time[i] - time[i - 1] > gap {
            segments.push(Interval::new(start, i));
            start = i;
        }
    }
    segments.push(Interval::new(start, n));

    segments
}
