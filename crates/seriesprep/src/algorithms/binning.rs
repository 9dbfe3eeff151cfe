//! Adaptive binning of unevenly sampled timestamps.
//!
//! ## Purpose
//!
//! This module groups sorted timestamps into contiguous index ranges ("bins")
//! whose points are close to one another in time. It is an alternative to
//! regular binning for series with clustered, irregular sampling, such as
//! repeated short observation runs separated by long gaps.
//!
//! ## Design notes
//!
//! * **Divide and conquer**: Each range commits only to its single tightest
//!   candidate interval; the unconsumed prefix and suffix are refined
//!   independently afterwards.
//! * **Explicit work list**: Ranges are processed from a stack instead of by
//!   recursion, so adversarial inputs cannot exhaust the call stack. Ranges
//!   are independent, so processing order does not affect the result.
//! * **Cost**: Candidate discovery is a backward scan and degrades towards
//!   O(m^2) per range; with O(m) levels the worst case is roughly O(n^3).
//!
//! ## Key concepts
//!
//! * **Candidate**: For each point `i`, the range reaching back to the first
//!   point with `time[j] > time[i] - interval`. Consecutive points sharing a
//!   left boundary extend the same candidate.
//! * **Spread**: Population standard deviation of the candidate's timestamps.
//! * **Selection**: The candidate with the least spread; the earliest wins ties.
//!
//! ## Invariants
//!
//! * Timestamps are sorted non-decreasingly and finite.
//! * Every bin holds at least two points.
//! * Bins are pairwise disjoint and returned in ascending index order.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs.
//! * This module does not compute the unbinned index set (see `engine`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::std_dev;
use crate::primitives::interval::Interval;

// ============================================================================
// Candidate Discovery
// ============================================================================

/// Find the candidate intervals of a sorted sub-sequence.
///
/// Indices in the returned intervals are local to `time`.
pub fn find_candidates<T: Float>(time: &[T], interval: T) -> Vec<Interval> {
    let mut candidates: Vec<Interval> = Vec::new();

    for (i, &t) in time.iter().enumerate() {
        let lower = t - interval;

        // Scan backwards while the preceding point is still within reach
        let mut left = i;
        while left > 0 && time[left - 1] > lower {
            left -= 1;
        }

        // A single point is not a candidate
        if left == i {
            continue;
        }

        match candidates.last_mut() {
            Some(last) if last.start == left => last.stop = i + 1,
            _ => candidates.push(Interval::new(left, i + 1)),
        }
    }

    candidates
}

// ============================================================================
// Selection
// ============================================================================

/// Pick the candidate with the smallest timestamp spread.
///
/// Ties resolve to the earliest candidate. Returns `None` if there are no
/// candidates.
pub fn select_tightest<T: Float>(time: &[T], candidates: &[Interval]) -> Option<Interval> {
    let mut best: Option<(Interval, T)> = None;

    for &candidate in candidates {
        let spread = std_dev(&time[candidate.range()]);
        match best {
            Some((_, best_spread)) if spread >= best_spread => {}
            _ => best = Some((candidate, spread)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

// ============================================================================
// Partitioning
// ============================================================================

/// Partition `time` into bins.
///
/// The tightest candidate of the whole sequence becomes a bin, then the
/// prefix before it and the suffix after it are partitioned the same way
/// until no range holds a candidate. Returned intervals index into `time`.
pub fn partition<T: Float>(time: &[T], interval: T) -> Vec<Interval> {
    let n = time.len();
    let mut bins = Vec::new();
    if n < 2 {
        return bins;
    }

    let mut pending = vec![Interval::new(0, n)];

    while let Some(range) = pending.pop() {
        if range.len() < 2 {
            continue;
        }

        let sub = &time[range.range()];
        let candidates = find_candidates(sub, interval);
        let Some(best) = select_tightest(sub, &candidates) else {
            continue;
        };
        let best = best.shift(range.start);

        if best.start > range.start {
            pending.push(Interval::new(range.start, best.start));
        }
        if best.stop < range.stop {
            pending.push(Interval::new(best.stop, range.stop));
        }

        bins.push(best);
    }

    bins.sort_unstable_by_key(|bin| bin.start);
    bins
}

/// Indices in `0..n` not covered by any of the sorted, disjoint `bins`.
pub fn uncovered(n: usize, bins: &[Interval]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut next = 0;

    for bin in bins {
        out.extend(next..bin.start);
        next = bin.stop;
    }
    out.extend(next..n);

    out
}
