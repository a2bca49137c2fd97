//! Outcome reporting for extraction runs.
//!
//! [`crate::pipeline::extract_addresses`] reports to an optional [`ExtractObserver`]:
//! `on_success` with row tallies, `on_failure` with a computed severity, and `on_alert` when
//! that severity reaches [`crate::pipeline::ExtractOptions::alert_at_or_above`].

use std::path::PathBuf;

use crate::error::ExtractError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExtractSeverity {
    /// Bad input data.
    Error,
    /// Missing input or filesystem failures.
    Critical,
}

impl ExtractSeverity {
    /// Severity the pipeline assigns to `error`.
    pub fn of(error: &ExtractError) -> Self {
        match error {
            ExtractError::InputNotFound { .. }
            | ExtractError::InputRead { .. }
            | ExtractError::OutputWrite { .. } => Self::Critical,
            ExtractError::MalformedRow { .. } => Self::Error,
        }
    }
}

/// Paths involved in an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractContext {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Row tallies reported on success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Data rows read from the input (header excluded).
    pub rows_read: usize,
    /// Addresses written to the output.
    pub emitted: usize,
    /// Rows dropped for lacking a house number or street.
    pub skipped: usize,
}

/// Observer interface for extraction outcomes.
pub trait ExtractObserver: Send + Sync {
    /// Called when the output file has been written.
    fn on_success(&self, _ctx: &ExtractContext, _stats: ExtractStats) {}

    /// Called when any stage fails.
    fn on_failure(&self, _ctx: &ExtractContext, _severity: ExtractSeverity, _error: &ExtractError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ExtractContext, severity: ExtractSeverity, error: &ExtractError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Logs successful runs to stderr, including the row tallies the stdout summary omits.
///
/// Failures are not logged: the caller owns the process boundary and reports the error itself.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ExtractObserver for StdErrObserver {
    fn on_success(&self, ctx: &ExtractContext, stats: ExtractStats) {
        eprintln!(
            "[extract][ok] input={} output={} rows={} emitted={} skipped={}",
            ctx.input.display(),
            ctx.output.display(),
            stats.rows_read,
            stats.emitted,
            stats.skipped
        );
    }
}
