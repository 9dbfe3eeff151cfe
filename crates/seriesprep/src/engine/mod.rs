//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates each operation: it validates inputs, runs the
//! algorithms and assembles the outputs. It also owns the reporter hook
//! through which binning diagnostics leave the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operation runners.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;

/// Diagnostics reporters.
pub mod report;
