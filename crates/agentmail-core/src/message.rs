//! Message model and priority vocabulary.

use agentmail_store::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels;

/// Priority vocabulary for messages.
///
/// Records store priority as a bare integer; this enum is the meaning of
/// the four levels the mail layer uses. [`Message::priority`] stays a raw
/// integer because the decode path trusts whatever the record carries —
/// the enum is applied where normalization or display is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Drop everything.
    Urgent,
    /// Ahead of the normal flow.
    High,
    /// The default.
    #[default]
    Normal,
    /// Whenever you get to it.
    Low,
}

impl Priority {
    /// Interpret a raw priority level, normalizing anything outside `0..=3`
    /// to [`Priority::Normal`].
    #[must_use]
    pub const fn from_level(level: i64) -> Self {
        match level {
            0 => Self::Urgent,
            1 => Self::High,
            3 => Self::Low,
            _ => Self::Normal,
        }
    }

    /// The numeric level stored on records.
    #[must_use]
    pub const fn level(self) -> i64 {
        match self {
            Self::Urgent => 0,
            Self::High => 1,
            Self::Normal => 2,
            Self::Low => 3,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

/// A mail message.
///
/// The in-memory view of one record in the backing store. `id` stays empty
/// until the store has persisted the message; `read` is derived purely from
/// the presence of the `read` label, so decoding the same record twice
/// always yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Store-assigned identifier; empty until persisted.
    pub id: String,
    /// Sender identity.
    pub from: String,
    /// Recipient identity.
    pub to: String,
    /// Subject line; becomes the record title.
    pub subject: String,
    /// Message body; becomes the record description.
    pub body: String,
    /// Creation time as reported by the store; `None` when the store did
    /// not report one or it failed to parse.
    pub timestamp: Option<DateTime<Utc>>,
    /// Raw priority level; `0` = urgent through `3` = low.
    pub priority: i64,
    /// Whether the `read` label is present.
    pub read: bool,
    /// Thread grouping identifier; empty means top-level.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thread_id: String,
    /// Id of the message this one replies to; empty means not a reply.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            id: String::new(),
            from: String::new(),
            to: String::new(),
            subject: String::new(),
            body: String::new(),
            timestamp: None,
            priority: Priority::Normal.level(),
            read: false,
            thread_id: String::new(),
            reply_to: String::new(),
        }
    }
}

impl Message {
    /// A new unsent message with normal priority.
    #[must_use]
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Translate a store record into a message.
    ///
    /// Total over any record: the priority is trusted verbatim, a missing
    /// or unparseable `created_at` leaves the timestamp `None`, and the
    /// label codec fills in sender, read flag, and threading. One malformed
    /// record must never abort a whole listing.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let fields = labels::decode(&record.labels);
        Self {
            id: record.id.clone(),
            from: fields.from,
            to: record.assignee.clone(),
            subject: record.title.clone(),
            body: record.description.clone(),
            timestamp: DateTime::parse_from_rfc3339(&record.created_at)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            priority: record.priority,
            read: fields.read,
            thread_id: fields.thread_id,
            reply_to: fields.reply_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: "am-42".to_string(),
            title: "Task".to_string(),
            description: "Run tests".to_string(),
            issue_type: "message".to_string(),
            status: "open".to_string(),
            assignee: "worker-1".to_string(),
            priority: 0,
            labels: vec!["from:hq".to_string(), "priority:0".to_string()],
            created_at: "2026-02-03T10:15:30Z".to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn default_priority_is_normal() {
        assert_eq!(Message::default().priority, 2);
        assert_eq!(Message::new("worker-1", "Task").priority, 2);
    }

    #[test]
    fn from_record_maps_fields() {
        let msg = Message::from_record(&record());
        assert_eq!(msg.id, "am-42");
        assert_eq!(msg.from, "hq");
        assert_eq!(msg.to, "worker-1");
        assert_eq!(msg.subject, "Task");
        assert_eq!(msg.body, "Run tests");
        assert_eq!(msg.priority, 0);
        assert!(!msg.read);
        assert!(msg.timestamp.is_some());
    }

    #[test]
    fn from_record_trusts_priority_verbatim() {
        let mut rec = record();
        rec.priority = 7;
        assert_eq!(Message::from_record(&rec).priority, 7);
    }

    #[test]
    fn from_record_tolerates_bad_timestamp() {
        let mut rec = record();
        rec.created_at = "not-a-date".to_string();
        assert_eq!(Message::from_record(&rec).timestamp, None);

        rec.created_at = String::new();
        assert_eq!(Message::from_record(&rec).timestamp, None);
    }

    #[test]
    fn from_record_is_idempotent() {
        let mut rec = record();
        rec.labels.push("read".to_string());
        rec.labels.push("read".to_string());
        let first = Message::from_record(&rec);
        let second = Message::from_record(&rec);
        assert!(first.read);
        assert_eq!(first, second);
    }

    #[test]
    fn from_record_reads_threading_labels() {
        let mut rec = record();
        rec.labels.push("reply-to:hq-abc123".to_string());
        rec.labels.push("thread:t-1".to_string());
        let msg = Message::from_record(&rec);
        assert_eq!(msg.reply_to, "hq-abc123");
        assert_eq!(msg.thread_id, "t-1");
    }

    #[test]
    fn priority_levels_round_trip() {
        for level in 0..=3 {
            assert_eq!(Priority::from_level(level).level(), level);
        }
    }

    #[test]
    fn priority_out_of_range_normalizes() {
        assert_eq!(Priority::from_level(-1), Priority::Normal);
        assert_eq!(Priority::from_level(7), Priority::Normal);
    }

    #[test]
    fn serialize_omits_empty_threading_fields() {
        let json = serde_json::to_string(&Message::new("worker-1", "Task")).unwrap();
        assert!(!json.contains("thread_id"));
        assert!(!json.contains("reply_to"));

        let mut msg = Message::new("worker-1", "Task");
        msg.reply_to = "hq-abc123".to_string();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""reply_to":"hq-abc123""#));
    }
}
