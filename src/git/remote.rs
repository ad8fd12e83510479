// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote selection.
//!
//! ```text
//! remotes: 0   -> NoRemotes
//!          1   -> that remote
//!          2+  -> patchsets.remote
//!                   unset        -> RemoteNotConfigured
//!                   not a remote -> RemoteNotFound
//! ```

use tracing::debug;

use super::shell::Git;
use crate::error::{GitError, Result};

/// Repository-local git config key naming the patchset remote.
pub const REMOTE_CONFIG_KEY: &str = "patchsets.remote";

/// Picks the patchset remote from the configured remotes and the value of
/// `patchsets.remote`.
///
/// # Errors
///
/// Returns the [`GitError`] describing why no remote can be chosen.
pub fn select_remote(
    remotes: &[String],
    configured: Option<&str>,
) -> std::result::Result<String, GitError> {
    match remotes {
        [] => Err(GitError::NoRemotes),
        [only] => Ok(only.clone()),
        _ => match configured.map(str::trim).filter(|c| !c.is_empty()) {
            None => Err(GitError::RemoteNotConfigured {
                remotes: remotes.to_vec(),
            }),
            Some(name) if remotes.iter().any(|r| r == name) => Ok(name.to_string()),
            Some(name) => Err(GitError::RemoteNotFound {
                remote: name.to_string(),
                remotes: remotes.to_vec(),
            }),
        },
    }
}

impl Git {
    /// Resolves the remote patchsets are fetched from and pushed to.
    ///
    /// # Errors
    ///
    /// Fails with a [`GitError`] when the remote is missing or ambiguous, or
    /// when git itself fails.
    pub async fn resolve_remote(&self) -> Result<String> {
        let remotes = self.remotes().await?;
        let configured = if remotes.len() > 1 {
            self.local_config(REMOTE_CONFIG_KEY).await?
        } else {
            None
        };
        let remote = select_remote(&remotes, configured.as_deref())?;
        debug!(remote = %remote, candidates = remotes.len(), "remote resolved");
        Ok(remote)
    }
}
