//! # seriesprep: preprocessing for irregularly sampled measurement series
//!
//! Utilities to prepare unevenly sampled series (brightness, polarization,
//! any value observed at irregular timestamps) before scientific analysis:
//!
//! - **Outlier flagging**: smooth the series with a window function and flag
//!   points whose residual exceeds a multiple of the mean residual.
//! - **Large-uncertainty flagging**: flag uncertainties above a multiple of
//!   their mean.
//! - **Adaptive binning**: group sorted timestamps into compact bins of
//!   points that lie close together in time.
//! - **Gap splitting**: cut a series wherever consecutive timestamps are
//!   further apart than a gap length.
//!
//! All operations are pure: they read slices and return fresh values.
//!
//! ## Quick Start
//!
//! ```rust
//! use seriesprep::prelude::*;
//!
//! let time = vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0];
//! let (bins, unbinned) = smart_binning(&time, 2.5)?;
//!
//! assert_eq!(bins, vec![vec![0, 1, 2], vec![3, 4, 5]]);
//! assert!(unbinned.is_empty());
//! # Result::<(), PrepError>::Ok(())
//! ```
//!
//! ### Builders and diagnostics
//!
//! Every operation also has a fluent builder. The binning builder accepts a
//! reporter that receives the bin-size summary instead of printing it:
//!
//! ```rust
//! use seriesprep::prelude::*;
//!
//! let time = vec![0.0, 0.1, 0.2, 5.0, 5.1, 9.0];
//!
//! let binning = SmartBinningBuilder::new()
//!     .interval(0.5)
//!     .reporter(|summary: &BinSummary| println!("{summary}"))
//!     .build()?
//!     .fit(&time)?;
//!
//! assert_eq!(binning.len(), 2);
//! assert_eq!(binning.unbinned, vec![5]);
//! # Result::<(), PrepError>::Ok(())
//! ```
//!
//! ```text
//! 2 bins found.
//! time points per bin:
//!   Min:           2
//!   Median:        2
//!   Mean:          2
//!   Max:           3
//! ```
//!
//! ### Outliers
//!
//! ```rust
//! use seriesprep::prelude::*;
//!
//! let mut x: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
//! x[40] += 5.0;
//!
//! let result = OutlierFlaggerBuilder::new()
//!     .window_length(11)
//!     .threshold(3.0)
//!     .window_function(Hann)
//!     .build()?
//!     .fit(&x)?;
//!
//! assert!(result.mask[40]);
//! # Result::<(), PrepError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every operation returns `Result<_, PrepError>`. All errors are raised
//! before any computation starts and all of them are invalid-argument
//! conditions: unsorted or non-finite timestamps, even or oversized smoothing
//! windows, non-positive thresholds, intervals or gaps.
//!
//! ## Features
//!
//! - `std` (default): standard library support. Disable for `no_std + alloc`.
//! - `tracing`: structured diagnostics via the `tracing` crate
//!   (`TracingReporter`, debug events from the outlier flagger).
//! - `dev`: exposes the internal layers for testing.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and errors.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - smoothing, flagging, binning, splitting.
mod algorithms;

// Layer 4: Engine - validation, orchestration and outputs.
mod engine;

// High-level fluent API.
mod api;

pub use api::{mask_largeunc, mask_outliers, smart_binning, split_data};

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "tracing")]
    pub use crate::api::TracingReporter;
    pub use crate::api::{
        Bin, BinSummary, Binning, GapSplitter, GapSplitterBuilder, NoReporter, OutlierFlagger,
        OutlierFlaggerBuilder, OutlierResult, PrepError, Reporter, SmartBinning,
        SmartBinningBuilder, UncertaintyFlagger, UncertaintyFlaggerBuilder,
        WindowFunction::{self, Bartlett, Blackman, Flat, Hamming, Hann},
        mask_largeunc, mask_outliers, smart_binning, split_data,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
