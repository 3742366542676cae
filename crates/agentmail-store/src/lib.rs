//! # agentmail-store
//!
//! The backing-store boundary for agentmail.
//!
//! Messages are persisted as generic records in an external issue tracker
//! that is driven entirely through its command-line interface. This crate
//! owns that boundary:
//!
//! - **Record model**: the JSON shape the tracker emits (`--json` output)
//!   and the payloads agentmail hands to it ([`Record`], [`CreateRecord`],
//!   [`ListQuery`])
//! - **Wire commands**: pure argv builders for every tracker subcommand the
//!   mail layer relies on (create, list, show, label add, close)
//! - **Client**: the [`Store`] capability trait and [`CliStore`], which
//!   spawns the tracker binary and surfaces its diagnostics on failure
//!
//! The crate performs no retries and imposes no timeout of its own: every
//! operation is a single subprocess round-trip, and the tracker's own
//! concurrency control is the only concurrency control there is.
//!
//! ## Quick Start
//!
//! ```ignore
//! use agentmail_store::{CliStore, ListQuery, Store};
//!
//! #[tokio::main]
//! async fn main() -> agentmail_store::Result<()> {
//!     let store = CliStore::from_env();
//!     let records = store.list(&ListQuery::open_messages("worker-1")).await?;
//!     for record in &records {
//!         println!("{}: {}", record.id, record.title);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod client;
pub mod command;
mod error;
mod record;

pub use client::{CliStore, Store};
pub use error::{Error, Result};
pub use record::{CreateRecord, ListQuery, Record};

/// Environment variable naming the tracker binary to invoke.
pub const STORE_BIN_ENV: &str = "AM_STORE_BIN";

/// Tracker binary used when [`STORE_BIN_ENV`] is unset.
pub const DEFAULT_STORE_BIN: &str = "bd";

/// The record type under which mail messages are filed.
pub const MESSAGE_TYPE: &str = "message";

/// Record status carried by messages that have not been deleted.
pub const STATUS_OPEN: &str = "open";
