//! Injectable diagnostics for the binning engine.
//!
//! ## Purpose
//!
//! Binning can summarize what it found (bin count and bin-size statistics).
//! Rather than printing, the engine hands a [`BinSummary`] to a
//! [`Reporter`] chosen by the caller, which keeps the computation pure.
//!
//! ## Key concepts
//!
//! * **Closures**: Any `Fn(&BinSummary)` is a reporter.
//! * **Default**: [`NoReporter`] discards summaries.
//! * **Structured logs**: With the `tracing` feature, [`TracingReporter`]
//!   emits one `info` event per binning call.
//!
//! ## Invariants
//!
//! * Reporters are called once per binning call, and only when at least one
//!   bin was found.

// Internal dependencies
use crate::engine::output::BinSummary;

/// Sink for binning diagnostics.
pub trait Reporter {
    /// Receive the summary of a completed binning call.
    fn report(&self, summary: &BinSummary);
}

impl<F> Reporter for F
where
    F: Fn(&BinSummary),
{
    fn report(&self, summary: &BinSummary) {
        self(summary)
    }
}

/// Reporter that discards every summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoReporter;

impl Reporter for NoReporter {
    #[inline]
    fn report(&self, _summary: &BinSummary) {}
}

/// Reporter that emits summaries as structured `tracing` events.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingReporter;

#[cfg(feature = "tracing")]
impl Reporter for TracingReporter {
    fn report(&self, summary: &BinSummary) {
        tracing::info!(
            bins = summary.bins,
            min = summary.min,
            median = summary.median,
            mean = summary.mean,
            max = summary.max,
            "smart binning finished"
        );
    }
}
