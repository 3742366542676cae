//! Label codec: message metadata as a flat label set.
//!
//! The backing store has no structured metadata field, so everything the
//! record model cannot express natively rides on its labels as `key:value`
//! tokens, plus the bare `read` token for the read flag. Encode emits a
//! comma-joined string in a stable order; decode scans an unordered label
//! set and tolerates unknown tokens.

use crate::error::{Error, Result};

/// Bare label marking a message as read.
pub const LABEL_READ: &str = "read";

const FROM_PREFIX: &str = "from:";
const PRIORITY_PREFIX: &str = "priority:";
const REPLY_TO_PREFIX: &str = "reply-to:";
const THREAD_PREFIX: &str = "thread:";

/// Metadata fields recovered from a record's label set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFields {
    /// Sender identity, from `from:<x>`.
    pub from: String,
    /// Read flag, from the bare `read` token.
    pub read: bool,
    /// Thread identifier, from `thread:<x>`.
    pub thread_id: String,
    /// Replied-to message id, from `reply-to:<x>`.
    pub reply_to: String,
}

/// Encode message metadata as the comma-joined label string handed to the
/// store on record creation.
///
/// Token order is stable: `from`, `priority`, then `reply-to` and `thread`
/// when present. Callers must have vetted the values with [`check_value`];
/// encoding performs no escaping.
#[must_use]
pub fn encode(from: &str, priority: i64, reply_to: &str, thread_id: &str) -> String {
    let mut labels = format!("{FROM_PREFIX}{from},{PRIORITY_PREFIX}{priority}");
    if !reply_to.is_empty() {
        labels.push(',');
        labels.push_str(REPLY_TO_PREFIX);
        labels.push_str(reply_to);
    }
    if !thread_id.is_empty() {
        labels.push(',');
        labels.push_str(THREAD_PREFIX);
        labels.push_str(thread_id);
    }
    labels
}

/// Decode a record's label set into metadata fields.
///
/// Labels are an unordered set: every label is scanned independently, the
/// last occurrence of a duplicated key wins, unrecognized labels are
/// ignored, and absent keys leave their field at its zero value. Values are
/// split at the first `:` only, so a value containing `:` written by a
/// foreign producer still comes back intact.
#[must_use]
pub fn decode(labels: &[String]) -> LabelFields {
    let mut fields = LabelFields::default();
    for label in labels {
        if let Some(value) = label.strip_prefix(FROM_PREFIX) {
            fields.from = value.to_string();
        } else if label == LABEL_READ {
            fields.read = true;
        } else if let Some(value) = label.strip_prefix(THREAD_PREFIX) {
            fields.thread_id = value.to_string();
        } else if let Some(value) = label.strip_prefix(REPLY_TO_PREFIX) {
            fields.reply_to = value.to_string();
        }
    }
    fields
}

/// Reject values that would corrupt the label grammar.
///
/// `,` splits the label list and `:` separates key from value; a value
/// carrying either cannot be represented. The empty string passes, since
/// optional fields are simply not emitted.
///
/// # Errors
///
/// Returns [`Error::LabelValue`] when `value` contains a delimiter.
pub fn check_value(field: &'static str, value: &str) -> Result<()> {
    if value.contains([':', ',']) {
        return Err(Error::LabelValue {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
