//! # agentmail-core
//!
//! Core mail logic for agentmail.
//!
//! A [`Message`] exists in memory only; its durable form is a generic record
//! in an external issue tracker, reached through the
//! [`agentmail_store::Store`] capability. This crate owns the mapping
//! between the two worlds:
//!
//! - **Message model**: [`Message`] and the [`Priority`] vocabulary
//! - **Label codec**: the [`labels`] module, which folds sender, thread,
//!   reply-to, and read-state into the record's flat label set and back
//! - **Router**: [`Router`] validates and sends a composed message as one
//!   new record
//! - **Mailbox**: [`Mailbox`] lists, fetches, marks read, and deletes the
//!   records addressed to an identity
//! - **Identity**: the [`identity`] module resolves who "you" are from the
//!   flag, environment, tmux session, or hostname
//!
//! Both `Router` and `Mailbox` are generic over `S: Store`, so every path
//! through this crate can be driven by an in-memory fake without spawning a
//! single process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod identity;
pub mod labels;
mod mailbox;
mod message;
mod router;

pub use error::{Error, Result};
pub use mailbox::Mailbox;
pub use message::{Message, Priority};
pub use router::Router;
