//! Descriptive statistics used by the flaggers and the binning engine.
//!
//! ## Design notes
//!
//! * **Spread**: The standard deviation is the population form (divides by
//!   `n`), matching how bin spread is compared across candidates.
//! * **Median**: Quickselect-based, O(n), operates in place on a scratch slice.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Arithmetic mean of `vals`; zero for an empty slice.
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or(T::one());
    let mut sum = T::zero();
    for &val in vals {
        sum = sum + val;
    }
    sum / n
}

// Population standard deviation of `vals`; zero for an empty slice.
#[inline]
pub fn std_dev<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mu = mean(vals);
    let n = T::from(vals.len()).unwrap_or(T::one());
    let mut ss = T::zero();
    for &val in vals {
        let d = val - mu;
        ss = ss + d * d;
    }
    (ss / n).sqrt()
}

// Median computed in place using quickselect; zero for an empty slice.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 1 {
        return upper;
    }

    // Even length: the lower middle is the largest value left of `mid`
    let mut lower = vals[0];
    for &v in &vals[1..mid] {
        if v > lower {
            lower = v;
        }
    }

    (lower + upper) / T::from(2.0).unwrap_or(T::one() + T::one())
}
