//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions:
//! - Window functions used as smoothing kernels
//! - Mirror padding and "valid" convolution
//! - Descriptive statistics (mean, spread, median)
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Window functions for smoothing.
pub mod kernel;

/// Descriptive statistics (mean, standard deviation, median).
pub mod scaling;

/// Boundary padding utilities.
pub mod boundary;

/// Discrete convolution.
pub mod convolution;
