// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Patchset lookup against the remote.
//!
//! ```text
//! git ls-remote <remote> refs/tickets/05/5/*
//!   <sha>\trefs/tickets/05/5/1
//!   <sha>\trefs/tickets/05/5/3     --> current = 3 (none listed -> 0)
//! ```

use tracing::debug;

use super::refs::{patchset_glob, patchset_ref};
use super::shell::Git;
use crate::error::{GitError, Result};

/// Patchset number of an `ls-remote` line belonging to `ticket`.
fn listed_patchset(line: &str, ticket: u64) -> Option<u64> {
    let reference = line.split_whitespace().last()?;
    let prefix = patchset_glob(ticket);
    let number = reference.strip_prefix(prefix.strip_suffix('*')?)?;
    number.parse().ok()
}

/// Highest patchset among `ls-remote` lines, 0 when none match.
#[must_use]
pub fn highest_patchset(lines: &[String], ticket: u64) -> u64 {
    lines
        .iter()
        .filter_map(|l| listed_patchset(l, ticket))
        .max()
        .unwrap_or(0)
}

impl Git {
    /// Latest patchset of `ticket` on `remote`; 0 when it has none.
    ///
    /// # Errors
    ///
    /// Fails if the remote cannot be listed.
    pub async fn current_patchset(&self, remote: &str, ticket: u64) -> Result<u64> {
        let lines = self.ls_remote(remote, &patchset_glob(ticket)).await?;
        let current = highest_patchset(&lines, ticket);
        debug!(ticket, patchset = current, "current patchset");
        Ok(current)
    }

    /// Returns `patchset` if exactly that patchset exists on `remote`, else 0.
    ///
    /// # Errors
    ///
    /// Fails if the remote cannot be listed.
    pub async fn validate_patchset(&self, remote: &str, ticket: u64, patchset: u64) -> Result<u64> {
        let lines = self
            .ls_remote(remote, &patchset_ref(ticket, patchset))
            .await?;
        let found = highest_patchset(&lines, ticket) == patchset;
        debug!(ticket, patchset, found, "validated patchset");
        Ok(if found { patchset } else { 0 })
    }

    /// Resolves the requested patchset (`None` or 0 means latest).
    ///
    /// # Errors
    ///
    /// `NoPatchsets` when the ticket has none, `PatchsetNotFound` when the
    /// requested one is missing.
    pub async fn resolve_patchset(
        &self,
        remote: &str,
        ticket: u64,
        requested: Option<u64>,
    ) -> Result<u64> {
        match requested.filter(|p| *p > 0) {
            None => match self.current_patchset(remote, ticket).await? {
                0 => Err(GitError::NoPatchsets {
                    ticket,
                    remote: remote.to_string(),
                }
                .into()),
                current => Ok(current),
            },
            Some(patchset) => match self.validate_patchset(remote, ticket, patchset).await? {
                0 => Err(GitError::PatchsetNotFound {
                    ticket,
                    patchset,
                    remote: remote.to_string(),
                }
                .into()),
                found => Ok(found),
            },
        }
    }
}
