//! Identity resolution: who is sending and receiving mail.
//!
//! Identities are free-form strings; agents running inside tmux get their
//! session name for free, which is what makes unaddressed `am inbox` calls
//! work from any pane.

use tokio::process::Command;
use tracing::debug;

/// Environment variable overriding the detected identity.
pub const IDENTITY_ENV: &str = "AM_IDENTITY";

/// Identity of last resort when nothing can be detected.
pub const FALLBACK_IDENTITY: &str = "unknown";

/// Resolve the current identity.
///
/// Precedence: an explicit non-empty value (the `--identity` flag), the
/// `AM_IDENTITY` environment variable, the tmux session name when running
/// inside tmux, then the hostname. Every probe that fails falls through to
/// the next; the final fallback is the literal `unknown`.
pub async fn resolve(explicit: Option<&str>) -> String {
    if let Some(id) = explicit
        && !id.is_empty()
    {
        return id.to_string();
    }

    if let Ok(id) = std::env::var(IDENTITY_ENV)
        && !id.is_empty()
    {
        return id;
    }

    if inside_tmux()
        && let Some(session) = tmux_session().await
    {
        debug!(session = %session, "identity from tmux session");
        return session;
    }

    hostname().unwrap_or_else(|| FALLBACK_IDENTITY.to_string())
}

/// Whether this process is running inside a tmux session.
#[must_use]
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some()
}

/// Current tmux session name, if it can be queried.
async fn tmux_session() -> Option<String> {
    let output = Command::new("tmux")
        .args(["display-message", "-p", "#S"])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let session = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!session.is_empty()).then_some(session)
}

/// Machine hostname, if non-empty.
fn hostname() -> Option<String> {
    let name = gethostname::gethostname().to_string_lossy().trim().to_string();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explicit_identity_wins() {
        assert_eq!(resolve(Some("hq")).await, "hq");
    }

    #[tokio::test]
    async fn empty_explicit_identity_is_ignored() {
        // Whatever the fallback chain produces, it is never the empty
        // string.
        assert_ne!(resolve(Some("")).await, "");
    }
}
