//! Router: validate and send composed messages.

use agentmail_store::{CreateRecord, MESSAGE_TYPE, Store};
use tracing::debug;

use crate::error::{Error, Result};
use crate::labels;
use crate::message::{Message, Priority};

/// Sends messages on behalf of one identity.
///
/// Each successful [`Router::send`] creates exactly one new record in the
/// backing store; there is no retry and no idempotency key, so sending the
/// same message twice produces two records.
#[derive(Debug, Clone)]
pub struct Router<S> {
    identity: String,
    store: S,
}

impl<S: Store> Router<S> {
    /// Router sending as `identity` through `store`.
    pub fn new(identity: impl Into<String>, store: S) -> Self {
        Self {
            identity: identity.into(),
            store,
        }
    }

    /// Identity used when a message does not name its sender.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Validate `message` and create its record in the recipient's mailbox.
    ///
    /// The sender defaults to the router's identity when unset and the
    /// priority is normalized into `0..=3`. Validation runs before any
    /// store interaction.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing recipient or subject, or
    /// for metadata values that cannot be label-encoded; store failures
    /// propagate unchanged.
    pub async fn send(&self, message: &Message) -> Result<()> {
        if message.to.is_empty() {
            return Err(Error::MissingRecipient);
        }
        if message.subject.is_empty() {
            return Err(Error::MissingSubject);
        }

        let from = if message.from.is_empty() {
            self.identity.clone()
        } else {
            message.from.clone()
        };
        let priority = Priority::from_level(message.priority).level();

        labels::check_value("sender", &from)?;
        labels::check_value("reply-to", &message.reply_to)?;
        labels::check_value("thread", &message.thread_id)?;

        let request = CreateRecord {
            title: message.subject.clone(),
            record_type: MESSAGE_TYPE.to_string(),
            assignee: message.to.clone(),
            actor: from.clone(),
            labels: labels::encode(&from, priority, &message.reply_to, &message.thread_id),
            priority,
            description: if message.body.is_empty() {
                None
            } else {
                Some(message.body.clone())
            },
        };

        debug!(from = %from, to = %message.to, priority, "routing message");
        self.store.create(&request).await?;
        Ok(())
    }
}
