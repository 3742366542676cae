//! Data types crossing the backing-store boundary.

use serde::Deserialize;

use crate::{MESSAGE_TYPE, STATUS_OPEN};

/// A generic issue record as the tracker reports it in `--json` output.
///
/// Every field is defaulted so a sparse record still decodes; callers that
/// only care about a subset simply ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Tracker-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Record title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Record type tag (messages are filed as `message`).
    #[serde(default)]
    pub issue_type: String,
    /// Lifecycle status (`open`, `closed`, ...).
    #[serde(default)]
    pub status: String,
    /// Identity the record is assigned to.
    #[serde(default)]
    pub assignee: String,
    /// Identity that owns the record.
    #[serde(default)]
    pub owner: String,
    /// Numeric priority as stored by the tracker.
    #[serde(default)]
    pub priority: i64,
    /// Unordered label set.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Creation timestamp, RFC 3339.
    #[serde(default)]
    pub created_at: String,
    /// Identity that created the record.
    #[serde(default)]
    pub created_by: String,
    /// Last-update timestamp, RFC 3339.
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecord {
    /// Record title.
    pub title: String,
    /// Record type tag.
    pub record_type: String,
    /// Identity the record is addressed to.
    pub assignee: String,
    /// Identity acting as the creator.
    pub actor: String,
    /// Encoded label string, comma-joined.
    pub labels: String,
    /// Numeric priority.
    pub priority: i64,
    /// Description body. `None` omits the description flag entirely,
    /// which is not the same as passing an empty string.
    pub description: Option<String>,
}

/// Filters for listing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Record type to match.
    pub record_type: String,
    /// Assignee to match.
    pub assignee: String,
    /// Lifecycle status to match.
    pub status: String,
}

impl ListQuery {
    /// Query for the open messages addressed to `assignee`.
    #[must_use]
    pub fn open_messages(assignee: impl Into<String>) -> Self {
        Self {
            record_type: MESSAGE_TYPE.to_string(),
            assignee: assignee.into(),
            status: STATUS_OPEN.to_string(),
        }
    }
}
