//! User-facing errors from running an analysis.
//!
//! The analyzers themselves never fail; everything here comes from the
//! execution shell around them (worker startup, a panic mid-run, a broken
//! channel, cancellation, or a caller-imposed timeout).

/// Message used when a failure carries no detail of its own.
pub const GENERIC_FAILURE: &str = "An error occurred during analysis";

/// Error type for analysis runs.
///
/// Every variant displays as one sentence suitable for showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The background worker could not be started.
    #[error("Unable to start the analysis worker: {0}")]
    WorkerStartup(String),

    /// The worker reported a failure (or panicked) before producing a result.
    #[error("{0}")]
    WorkerFailed(String),

    /// The synchronous run panicked.
    #[error("{0}")]
    Failed(String),

    /// A message did not match the worker protocol.
    #[error("Malformed worker message: {0}")]
    Protocol(String),

    /// The worker went away without sending a terminal message.
    #[error("The analysis worker stopped unexpectedly")]
    Disconnected,

    /// The run was terminated by the caller.
    #[error("Analysis was cancelled")]
    Cancelled,

    /// The caller's deadline passed before a result arrived.
    #[error("Analysis timed out after {secs} seconds")]
    TimedOut { secs: u64 },
}

impl AnalysisError {
    /// The single message surfaced to users and sent over the wire.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }

    /// Whole seconds to report for `timeout`, rounded up so a sub-second
    /// deadline never reads as zero.
    pub fn timeout_secs(timeout: std::time::Duration) -> u64 {
        timeout
            .as_secs()
            .saturating_add(u64::from(timeout.subsec_nanos() > 0))
    }
}

/// Turn a caught panic payload into a message.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        GENERIC_FAILURE.to_string()
    }
}
