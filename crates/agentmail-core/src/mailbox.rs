//! Mailbox: inbox queries and read/delete state changes.

use agentmail_store::{ListQuery, Store};
use tracing::debug;

use crate::error::Result;
use crate::labels;
use crate::message::Message;

/// The inbox of one identity.
///
/// Queries cover open records of type `message` assigned to the identity;
/// state changes touch only the record's label set and status. Fetch and
/// mark are independent store round-trips — no atomicity is claimed across
/// them.
#[derive(Debug, Clone)]
pub struct Mailbox<S> {
    identity: String,
    store: S,
}

impl<S: Store> Mailbox<S> {
    /// Mailbox of `identity`, backed by `store`.
    pub fn new(identity: impl Into<String>, store: S) -> Self {
        Self {
            identity: identity.into(),
            store,
        }
    }

    /// Identity whose mail this mailbox reads.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// All open messages, in the order the store returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails or its response
    /// cannot be decoded. An empty mailbox is an empty list, not an error.
    pub async fn list(&self) -> Result<Vec<Message>> {
        let records = self
            .store
            .list(&ListQuery::open_messages(&self.identity))
            .await?;
        debug!(identity = %self.identity, count = records.len(), "listed mailbox");
        Ok(records.iter().map(Message::from_record).collect())
    }

    /// Open messages without the `read` label, preserving list order.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Mailbox::list`].
    pub async fn list_unread(&self) -> Result<Vec<Message>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|msg| !msg.read)
            .collect())
    }

    /// Fetch one message by id.
    ///
    /// # Errors
    ///
    /// A nonexistent id surfaces the store's own not-found failure
    /// unchanged.
    pub async fn get(&self, id: &str) -> Result<Message> {
        Ok(Message::from_record(&self.store.show(id).await?))
    }

    /// Mark a message read by adding the bare `read` label.
    ///
    /// Labels form a set, so marking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails.
    pub async fn mark_read(&self, id: &str) -> Result<()> {
        self.store.add_label(id, labels::LABEL_READ).await?;
        Ok(())
    }

    /// Delete a message by closing its record.
    ///
    /// Logical deletion: closed records drop out of [`Mailbox::list`] but
    /// remain reachable through [`Mailbox::get`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.close(id).await?;
        Ok(())
    }

    /// Number of unread messages.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Mailbox::list`].
    pub async fn count_unread(&self) -> Result<usize> {
        Ok(self.list_unread().await?.len())
    }
}
