// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only git queries.
//!
//! ```text
//! remotes()          git remote
//! local_config(key)  git config --local <key>     (unset -> None)
//! ls_remote(r, pat)  git ls-remote <r> <pat>
//! branches(pats)     git branch --no-color --list [pats]
//! status()           git status --porcelain
//! current_branch()   git status -b -s             (## header)
//! ```

use tracing::debug;

use super::refs::BranchName;
use super::shell::Git;
use crate::error::Result;

/// One line of `git branch --list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    /// Checked out in this working tree (`*` marker).
    pub current: bool,
}

impl LocalBranch {
    /// Parses a trimmed `git branch` line; detached HEAD entries yield `None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (current, name) = match line.strip_prefix('*') {
            Some(rest) => (true, rest.trim()),
            // `+` marks a branch checked out in another worktree.
            None => (false, line.strip_prefix('+').unwrap_or(line).trim()),
        };
        if name.is_empty() || name.starts_with('(') {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            current,
        })
    }
}

impl Git {
    /// Names of the configured remotes.
    ///
    /// # Errors
    ///
    /// Fails if `git remote` fails.
    pub async fn remotes(&self) -> Result<Vec<String>> {
        self.run(["remote"]).await
    }

    /// Value of a repository-local config key, `None` when unset.
    ///
    /// # Errors
    ///
    /// Fails only if git cannot be spawned.
    pub async fn local_config(&self, key: &str) -> Result<Option<String>> {
        let output = self.try_run(["config", "--local", key]).await?;
        if !output.success() {
            debug!(key, code = output.exit_code(), "config key unset");
            return Ok(None);
        }
        Ok(output.into_lines().into_iter().next().filter(|v| !v.is_empty()))
    }

    /// Lines of `git ls-remote <remote> <pattern>`.
    ///
    /// # Errors
    ///
    /// Fails if the remote cannot be listed.
    pub async fn ls_remote(&self, remote: &str, pattern: &str) -> Result<Vec<String>> {
        self.run(["ls-remote", remote, pattern]).await
    }

    /// Local branches, optionally restricted to glob patterns.
    ///
    /// # Errors
    ///
    /// Fails if `git branch` fails.
    pub async fn branches(&self, patterns: &[&str]) -> Result<Vec<LocalBranch>> {
        let mut args = vec!["branch", "--no-color", "--list"];
        args.extend_from_slice(patterns);
        let lines = self.run(args).await?;
        Ok(lines.iter().filter_map(|l| LocalBranch::parse(l)).collect())
    }

    /// Short-format working tree status, one entry per changed path.
    ///
    /// # Errors
    ///
    /// Fails if `git status` fails.
    pub async fn status(&self) -> Result<Vec<String>> {
        self.run(["status", "--porcelain"]).await
    }

    /// The `## ...` branch header of `git status -b -s`.
    ///
    /// # Errors
    ///
    /// Fails if `git status` fails.
    pub async fn status_header(&self) -> Result<Option<String>> {
        let lines = self.run(["status", "-b", "-s"]).await?;
        Ok(lines.into_iter().find(|l| l.starts_with("##")))
    }

    /// Classified current branch, [`BranchName::Other`] when detached.
    ///
    /// # Errors
    ///
    /// Fails if `git status` fails.
    pub async fn current_branch(&self) -> Result<BranchName> {
        Ok(self
            .status_header()
            .await?
            .as_deref()
            .map_or(BranchName::Other, BranchName::from_status_header))
    }
}
