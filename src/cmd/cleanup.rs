// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cleanup command implementation.
//!
//! ```text
//! pt cleanup 42      ticket/42  patchset/42/*
//! pt cleanup         ticket/*   patchset/*
//!
//! without --force: list candidates, current branch marked "(skip)", fail
//! with --force:    git branch -D each candidate except the current branch
//! ```

use tracing::debug;

use crate::cli::ticket::CleanupArgs;
use crate::error::{GitError, Result};
use crate::git::query::LocalBranch;
use crate::git::refs::ticket_branch;
use crate::git::shell::Git;
use crate::say;

/// `git branch --list` patterns selecting the branches to remove.
#[must_use]
pub fn cleanup_patterns(id: Option<u64>) -> Vec<String> {
    match id {
        Some(id) => vec![ticket_branch(id), format!("patchset/{id}/*")],
        None => vec!["ticket/*".to_string(), "patchset/*".to_string()],
    }
}

/// Lines shown when cleanup was not forced.
fn preview(id: Option<u64>, branches: &[LocalBranch]) -> Vec<String> {
    let scope = id.map_or_else(|| "all tickets".to_string(), |id| format!("ticket {id}"));
    std::iter::once(format!(
        "Cleanup would remove the following local branches for {scope}."
    ))
    .chain(branches.iter().map(|b| {
        if b.current {
            format!("  {} (skip)", b.name)
        } else {
            format!("  {}", b.name)
        }
    }))
    .collect()
}

/// Main handler for the cleanup command.
///
/// # Errors
///
/// Returns `CleanupNotForced` when branches were found but `--force` was not
/// given, or an error if listing or deleting a branch fails.
pub async fn run_cleanup_command(args: &CleanupArgs, git: &Git) -> Result<()> {
    let patterns = cleanup_patterns(args.id);
    let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
    let branches = git.branches(&patterns).await?;
    debug!(?patterns, count = branches.len(), "cleanup candidates");

    if branches.is_empty() {
        match args.id {
            Some(id) => say!("No local branches found for ticket {id}, cleanup skipped."),
            None => say!("No local ticket branches found, cleanup skipped."),
        }
        return Ok(());
    }

    if !args.force {
        for line in preview(args.id, &branches) {
            say!("{line}");
        }
        return Err(GitError::CleanupNotForced.into());
    }

    for branch in &branches {
        if branch.current {
            say!("Skipped {} because it is the current branch.", branch.name);
            continue;
        }
        git.echo(["branch", "-D", branch.name.as_str()]).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{cleanup_patterns, preview};
    use crate::git::query::LocalBranch;

    #[test]
    fn test_cleanup_patterns() {
        assert_eq!(cleanup_patterns(Some(42)), ["ticket/42", "patchset/42/*"]);
        assert_eq!(cleanup_patterns(None), ["ticket/*", "patchset/*"]);
    }

    #[test]
    fn test_preview_marks_current_branch() {
        let branches = [
            LocalBranch {
                name: "patchset/42/1".to_string(),
                current: false,
            },
            LocalBranch {
                name: "ticket/42".to_string(),
                current: true,
            },
        ];
        assert_eq!(
            preview(Some(42), &branches),
            [
                "Cleanup would remove the following local branches for ticket 42.",
                "  patchset/42/1",
                "  ticket/42 (skip)",
            ]
        );
        assert!(preview(None, &branches[..1])[0].ends_with("for all tickets."));
    }
}
