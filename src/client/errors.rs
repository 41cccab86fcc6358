//! Client error types.

use std::time::Duration;

use thiserror::Error;

/// Error from a registry query.
///
/// Every failure surfaces directly to the caller; nothing is retried or
/// logged-and-swallowed at this layer.
#[derive(Debug, Error)]
pub enum PkgConfigError {
    /// The registry tool could not be located when the client was
    /// constructed. The client never re-probes, so every query on an
    /// unavailable client fails this way without spawning anything.
    #[error("pkg-config is not available on this system")]
    ServiceNotAvailable,

    /// The subprocess could not be run, or exited unsuccessfully during
    /// an operation that needs its output.
    #[error("`{command}` failed with exit code {code:?}")]
    CommandExecutionFailed {
        command: String,
        /// Exit code, `None` when the process was killed by a signal or
        /// never started
        code: Option<i32>,
        stderr: String,
    },

    /// Captured output could not be decoded as text.
    #[error("could not parse output of `{command}`: {reason}")]
    ParsingCommandOutput { command: String, reason: String },

    /// The subprocess outlived the configured deadline and was killed.
    #[error("`{command}` did not finish within {timeout:?}")]
    TimedOut { command: String, timeout: Duration },
}
