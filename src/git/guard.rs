// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Preconditions checked before the working tree or branch set changes.
//!
//! ```text
//! ensure_clean      git status --porcelain
//!                   any line not starting with '?'  -> UncommittedChanges
//!                   (skipped when the override flag is set)
//!
//! ensure_creatable  git branch --list
//!                   target a/b/c is blocked by  a, a/b, a/b/c/...
//!                   (and a/b/c itself when it must not exist yet)
//! ```

use super::shell::Git;
use crate::error::{GitError, Override, Result};

/// Status lines that block a destructive command; untracked files never do.
#[must_use]
pub fn blocking_changes(status: &[String]) -> Vec<String> {
    status
        .iter()
        .filter(|line| !line.starts_with('?'))
        .cloned()
        .collect()
}

/// Existing branch names that prevent creating `target`.
///
/// Git stores branches as files under `refs/heads`, so a branch can not
/// coexist with another whose name is a path prefix of it.
#[must_use]
pub fn collision_blockers(existing: &[String], target: &str, include_self: bool) -> Vec<String> {
    let nested = format!("{target}/");
    existing
        .iter()
        .filter(|name| {
            let is_prefix = target
                .strip_prefix(name.as_str())
                .is_some_and(|rest| rest.starts_with('/'));
            is_prefix || name.starts_with(&nested) || (include_self && *name == target)
        })
        .cloned()
        .collect()
}

impl Git {
    /// Fails when tracked files are modified, unless `overridden`.
    ///
    /// # Errors
    ///
    /// `UncommittedChanges` naming the paths and the `flag` that lifts the guard.
    pub async fn ensure_clean(&self, command: &str, flag: Override, overridden: bool) -> Result<()> {
        if overridden {
            return Ok(());
        }
        let paths = blocking_changes(&self.status().await?);
        if paths.is_empty() {
            return Ok(());
        }
        Err(GitError::UncommittedChanges {
            command: command.to_string(),
            paths,
            flag,
        }
        .into())
    }

    /// Fails when existing local branches prevent creating `branch`.
    ///
    /// # Errors
    ///
    /// `BranchCollision` naming the blocking branches.
    pub async fn ensure_creatable(&self, action: &str, branch: &str, include_self: bool) -> Result<()> {
        let existing: Vec<String> = self
            .branches(&[])
            .await?
            .into_iter()
            .map(|b| b.name)
            .collect();
        let blockers = collision_blockers(&existing, branch, include_self);
        if blockers.is_empty() {
            return Ok(());
        }
        Err(GitError::BranchCollision {
            action: action.to_string(),
            branch: branch.to_string(),
            blockers,
        }
        .into())
    }
}
