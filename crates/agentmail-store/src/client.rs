//! Store capability trait and the CLI-spawning client.

use tokio::process::Command;
use tracing::debug;

use crate::command;
use crate::error::{Error, Result};
use crate::record::{CreateRecord, ListQuery, Record};
use crate::{DEFAULT_STORE_BIN, STORE_BIN_ENV};

/// Capability interface over the backing store.
///
/// The mail layer is written against this trait so it can be exercised with
/// an in-memory fake; [`CliStore`] is the implementation that talks to the
/// real tracker. Every operation is a single request/response round-trip
/// with no internal retry.
// Send bounds on the returned futures are not required by any caller.
#[allow(async_fn_in_trait)]
pub trait Store {
    /// Create one new record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails.
    async fn create(&self, request: &CreateRecord) -> Result<()>;

    /// List records matching `query`.
    ///
    /// A store that reports no matches yields an empty vector, never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails or its response is
    /// not valid JSON.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Record>>;

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails (including the
    /// store's own not-found failure, surfaced unchanged) or its response
    /// is not valid JSON.
    async fn show(&self, id: &str) -> Result<Record>;

    /// Add a label to a record. Labels form a set, so re-adding an
    /// existing label is a no-op on the store side.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails.
    async fn add_label(&self, id: &str, label: &str) -> Result<()>;

    /// Transition a record to closed status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store invocation fails.
    async fn close(&self, id: &str) -> Result<()>;
}

impl<S: Store> Store for &S {
    async fn create(&self, request: &CreateRecord) -> Result<()> {
        (**self).create(request).await
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Record>> {
        (**self).list(query).await
    }

    async fn show(&self, id: &str) -> Result<Record> {
        (**self).show(id).await
    }

    async fn add_label(&self, id: &str, label: &str) -> Result<()> {
        (**self).add_label(id, label).await
    }

    async fn close(&self, id: &str) -> Result<()> {
        (**self).close(id).await
    }
}

/// Store client that drives the tracker binary through its CLI.
#[derive(Debug, Clone)]
pub struct CliStore {
    program: String,
}

impl CliStore {
    /// Client invoking the given tracker binary.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Client invoking the binary named by `AM_STORE_BIN`, or `bd` when
    /// the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let program = std::env::var(STORE_BIN_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_BIN.to_string());
        Self::new(program)
    }

    /// Tracker binary this client invokes.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run one tracker invocation and return its stdout.
    async fn run(&self, verb: &str, args: &[String]) -> Result<Vec<u8>> {
        debug!(program = %self.program, verb, "invoking store");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| Error::Launch {
                program: self.program.clone(),
                verb: verb.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Failed {
                program: self.program.clone(),
                verb: verb.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl Store for CliStore {
    async fn create(&self, request: &CreateRecord) -> Result<()> {
        self.run("create", &command::create(request)).await?;
        Ok(())
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Record>> {
        let output = self.run("list", &command::list(query)).await?;
        parse_records(&output)
    }

    async fn show(&self, id: &str) -> Result<Record> {
        let output = self.run("show", &command::show(id)).await?;
        Ok(serde_json::from_slice(&output)?)
    }

    async fn add_label(&self, id: &str, label: &str) -> Result<()> {
        self.run("label add", &command::label_add(id, label)).await?;
        Ok(())
    }

    async fn close(&self, id: &str) -> Result<()> {
        self.run("close", &command::close(id)).await?;
        Ok(())
    }
}

/// Decode `list` output into records.
///
/// The tracker expresses "no results" in several shapes depending on
/// version: no output at all, a literal `null`, or an empty array. All of
/// them decode to the empty list.
fn parse_records(output: &[u8]) -> Result<Vec<Record>> {
    let text = String::from_utf8_lossy(output);
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "[]" {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_is_empty_list() {
        assert!(parse_records(b"").unwrap().is_empty());
    }

    #[test]
    fn null_output_is_empty_list() {
        assert!(parse_records(b"null\n").unwrap().is_empty());
    }

    #[test]
    fn empty_array_is_empty_list() {
        assert!(parse_records(b"[]\n").unwrap().is_empty());
    }

    #[test]
    fn records_decode() {
        let records =
            parse_records(br#"[{"id": "am-1", "title": "Hello"}, {"id": "am-2"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "am-1");
        assert_eq!(records[0].title, "Hello");
        assert_eq!(records[1].id, "am-2");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = parse_records(b"{not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn from_env_defaults_to_bd() {
        // AM_STORE_BIN is not set in the test environment.
        if std::env::var(STORE_BIN_ENV).is_err() {
            assert_eq!(CliStore::from_env().program(), DEFAULT_STORE_BIN);
        }
    }
}
