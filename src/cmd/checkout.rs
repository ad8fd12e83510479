// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checkout command implementation.
//!
//! # Branch Protocol
//!
//! ```text
//!                      local branch exists?
//!                 no /                    \ yes
//!     checkout -b <branch> <start>     checkout <branch>  (unless current)
//!                                            |
//!                                  --force? -+- reset --hard <start>
//!                                            |
//!                                    merge --ff-only <start>
//!                                            |
//!                                     fails --> Diverged
//!
//! ticket/<id>            start = <remote>/ticket/<id>, tracked
//! patchset/<id>/<n>      start = FETCH_HEAD
//! ```

use tracing::debug;

use super::fetch::fetch_patchset;
use crate::cli::ticket::CheckoutArgs;
use crate::error::{GitError, Override, Result};
use crate::git::refs::{patchset_branch, ticket_branch, tracking_branch};
use crate::git::shell::Git;
use crate::say;

/// Local branch to switch to and the revision it follows.
struct Target {
    branch: String,
    start: String,
    track: bool,
}

/// Main handler for the checkout command.
///
/// # Errors
///
/// Returns an error if tracked files are modified (without `--force`), if
/// the patchset cannot be fetched, if a branch name collides, or if the
/// local branch has diverged from the patchset.
pub async fn run_checkout_command(args: &CheckoutArgs, git: &Git) -> Result<()> {
    git.ensure_clean("checkout", Override::Force, args.force).await?;
    let remote = git.resolve_remote().await?;
    let id = args.ticket.id;
    let patchset = fetch_patchset(git, &remote, &args.ticket, args.quiet).await?;

    let target = match args.ticket.requested_patchset() {
        None => {
            let branch = ticket_branch(id);
            git.ensure_creatable(&format!("checkout of ticket {id}"), &branch, false)
                .await?;
            Target {
                branch,
                start: tracking_branch(&remote, id),
                track: true,
            }
        }
        Some(_) => {
            let branch = patchset_branch(id, patchset);
            git.ensure_creatable(
                &format!("checkout of ticket {id} patchset {patchset}"),
                &branch,
                false,
            )
            .await?;
            Target {
                branch,
                start: "FETCH_HEAD".to_string(),
                track: false,
            }
        }
    };

    if args.force && !args.quiet {
        say!(
            "Forcing checkout of ticket {id} patchset {patchset} on named branch '{}'",
            target.branch
        );
    }

    if switch_to(git, &target, args.force).await? {
        return Ok(());
    }
    Err(GitError::Diverged {
        branch: target.branch,
        patchset,
        remote,
    }
    .into())
}

/// Moves the work tree onto `target`; `false` when a fast-forward was refused.
async fn switch_to(git: &Git, target: &Target, force: bool) -> Result<bool> {
    let branch = target.branch.as_str();
    let start = target.start.as_str();
    let Some(local) = git.branches(&[branch]).await?.into_iter().next() else {
        let mut args = vec!["checkout"];
        if force {
            args.push("--force");
        }
        args.extend(["-b", branch]);
        if target.track {
            args.push("--track");
        }
        args.push(start);
        git.echo(&args).await?;
        return Ok(true);
    };

    if !local.current {
        let mut args = vec!["checkout"];
        if force {
            args.push("--force");
        }
        args.push(branch);
        git.echo(&args).await?;
    }

    if force {
        git.echo(["reset", "--hard", start]).await?;
        return Ok(true);
    }

    let output = git.try_run(["merge", "--ff-only", start]).await?;
    if !output.success() {
        debug!(branch, start, "fast-forward refused");
        return Ok(false);
    }
    if !is_up_to_date(output.lines()) {
        for line in output.lines() {
            say!("{line}");
        }
    }
    Ok(true)
}

/// Whether `git merge` reported nothing to do.
fn is_up_to_date(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|l| l.contains("up to date") || l.contains("up-to-date"))
}
