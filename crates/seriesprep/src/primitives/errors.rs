//! Error types for series preprocessing.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised by the outlier flagger,
//! the large-uncertainty flagger, the adaptive binning engine and the gap
//! splitter.
//!
//! ## Design notes
//!
//! * **Single kind**: Every variant is an invalid-argument condition. The
//!   computations are pure, so the only way to fail is a contract violation
//!   by the caller.
//! * **Contextual**: Variants carry the offending value or position.
//! * **Deferred**: Builder misconfiguration is stored and surfaced by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Invariants
//!
//! * Errors are raised before any output is produced (no partial results).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for preprocessing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PrepError {
    /// Input sequence is empty.
    EmptyInput,

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Timestamps are not sorted non-decreasingly.
    UnsortedTime {
        /// First position whose timestamp is smaller than its predecessor.
        index: usize,
    },

    /// Smoothing window must be odd and shorter than the series.
    InvalidWindowLength {
        /// The window length provided.
        got: usize,
        /// Length of the series being smoothed.
        n: usize,
    },

    /// Flagging threshold must be positive and finite.
    InvalidThreshold(f64),

    /// Binning interval must be positive and finite.
    InvalidInterval(f64),

    /// Gap length must be positive and finite.
    InvalidGap(f64),

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Required parameter was never set in a builder.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },
}

impl PrepError {
    /// Returns `true` for every variant.
    ///
    /// All preprocessing failures are invalid-argument conditions; this exists
    /// so callers can match on the kind without enumerating variants.
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        true
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnsortedTime { index } => write!(
                f,
                "Time is not sorted increasingly: time[{index}] < time[{}]",
                index - 1
            ),
            Self::InvalidWindowLength { got, n } => write!(
                f,
                "Invalid window_length: {got} (must be odd, at least 1 and less than {n})"
            ),
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {t} (must be > 0 and finite)")
            }
            Self::InvalidInterval(i) => {
                write!(f, "Invalid interval: {i} (must be > 0 and finite)")
            }
            Self::InvalidGap(g) => write!(f, "Invalid gap: {g} (must be > 0 and finite)"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrepError {}
