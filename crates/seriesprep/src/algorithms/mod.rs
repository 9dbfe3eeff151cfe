//! Layer 3: Algorithms
//!
//! This layer implements the core logic: window smoothing and residuals,
//! relative threshold flagging, adaptive binning and gap splitting. It
//! assumes validated inputs and is orchestrated by the engine layer.

// Window smoothing and residuals.
pub mod smoothing;

// Flagging values above a multiple of their mean.
pub mod flagging;

// Adaptive interval discovery and min-spread partitioning.
pub mod binning;

// Gap-based segmentation.
pub mod splitting;
