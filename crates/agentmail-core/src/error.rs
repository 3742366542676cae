//! Error types for the mail core.

use thiserror::Error;

/// Errors that can occur in mail operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A message was sent without a recipient.
    #[error("recipient is required")]
    MissingRecipient,

    /// A message was sent without a subject.
    #[error("subject is required")]
    MissingSubject,

    /// A metadata value contains a label delimiter and cannot be encoded
    /// without corrupting the label set.
    #[error("{field} must not contain ':' or ',': {value:?}")]
    LabelValue {
        /// Which metadata field carried the offending value.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] agentmail_store::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
