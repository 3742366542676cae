//! Error types for backing-store operations.

use thiserror::Error;

/// Errors that can occur while driving the backing store.
#[derive(Debug, Error)]
pub enum Error {
    /// The tracker binary could not be launched at all.
    #[error("failed to launch `{program} {verb}`: {source}")]
    Launch {
        /// Binary that was invoked.
        program: String,
        /// Subcommand that was being issued.
        verb: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The tracker ran and exited with a failure status.
    ///
    /// Carries the process's own diagnostic output; an empty result set is
    /// never reported this way.
    #[error("`{program} {verb}` failed: {stderr}")]
    Failed {
        /// Binary that was invoked.
        program: String,
        /// Subcommand that was being issued.
        verb: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The tracker answered with JSON the record model cannot decode.
    #[error("invalid store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
