//! `am` — agent-to-agent messaging CLI.
//!
//! Thin shell over `agentmail-core`: argument parsing, identity detection,
//! and terminal/JSON output. All mail semantics live in the core crate;
//! all persistence lives in the backing tracker reached through
//! `agentmail-store`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod output;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agentmail_core::{Mailbox, Message, Router, identity};
use agentmail_store::CliStore;

#[derive(Parser)]
#[command(
    name = "am",
    version,
    about = "Agent-to-agent messaging backed by an issue-tracker store"
)]
struct Cli {
    /// Your identity (default: auto-detect)
    #[arg(short, long, global = true)]
    identity: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a message to another agent
    Send {
        /// Recipient identity
        recipient: String,
        /// Message subject
        #[arg(short, long)]
        subject: String,
        /// Message body
        #[arg(short, long, default_value = "")]
        message: String,
        /// Priority 0-3 (0=urgent, 1=high, 2=normal, 3=low)
        #[arg(short, long, default_value_t = 2)]
        priority: i64,
        /// Message id this replies to
        #[arg(short, long, default_value = "")]
        reply_to: String,
        /// Thread id to group related messages
        #[arg(short, long, default_value = "")]
        thread: String,
    },
    /// List messages in your inbox
    Inbox {
        /// Show only unread messages
        #[arg(short, long)]
        unread: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Read a message and mark it as read
    Read {
        /// Message id
        id: String,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Check for unread mail (exits 1 when there is none)
    Check {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Delete (close) messages
    Delete {
        /// Message ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so tables and JSON stay pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentmail=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let identity = identity::resolve(cli.identity.as_deref()).await;
    let store = CliStore::from_env();
    tracing::debug!(identity = %identity, store = store.program(), "resolved environment");

    match cli.command {
        Command::Send {
            recipient,
            subject,
            message,
            priority,
            reply_to,
            thread,
        } => {
            let router = Router::new(&identity, &store);
            let mut msg = Message::new(recipient.clone(), subject);
            msg.body = message;
            msg.priority = priority;
            msg.reply_to = reply_to;
            msg.thread_id = thread;
            router
                .send(&msg)
                .await
                .context("failed to send message")?;
            println!("Message sent to {recipient}");
        }

        Command::Inbox { unread, json } => {
            let mailbox = Mailbox::new(&identity, &store);
            let messages = if unread {
                mailbox.list_unread().await
            } else {
                mailbox.list().await
            }
            .context("failed to list messages")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            } else if messages.is_empty() {
                println!("No messages");
            } else {
                print!("{}", output::render_inbox(&messages, Utc::now()));
            }
        }

        Command::Read { id, json } => {
            let mailbox = Mailbox::new(&identity, &store);
            let msg = mailbox.get(&id).await.context("failed to get message")?;

            // Mark-read is best effort: the message was already fetched.
            if let Err(err) = mailbox.mark_read(&id).await {
                eprintln!("Warning: could not mark message as read: {err}");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&msg)?);
            } else {
                print!("{}", output::render_message(&msg));
            }
        }

        Command::Check { json } => {
            let mailbox = Mailbox::new(&identity, &store);
            let unread = mailbox.count_unread().await.context("failed to check mail")?;

            if json {
                let report = json!({
                    "identity": identity,
                    "unread": unread,
                    "has_mail": unread > 0,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if unread == 0 {
                std::process::exit(1);
            } else {
                println!("You have {unread} unread message(s)");
            }
        }

        Command::Delete { ids } => {
            let mailbox = Mailbox::new(&identity, &store);
            for id in ids {
                mailbox
                    .delete(&id)
                    .await
                    .with_context(|| format!("failed to delete message {id}"))?;
                println!("Deleted {id}");
            }
        }
    }

    Ok(())
}
