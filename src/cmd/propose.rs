// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Propose command implementation.
//!
//! # Flow
//!
//! ```text
//! target = argument | ticket of current branch | "new"
//!    |
//!    +-- numeric and already has patchsets --> PatchsetExists
//!    |
//! git push <remote> HEAD:refs/for/<target>[%params]
//!    |
//!    +-- "--> #<id>" in output --> fetch ticket/<id>, set upstream
//!                                  (best effort)
//! ```

use tracing::{info, warn};

use crate::cli::push::ProposeArgs;
use crate::core::process::builder::ProcessFlags;
use crate::error::{GitError, Override, Result};
use crate::git::ack::acknowledged_ticket;
use crate::git::pushref::PushParams;
use crate::git::refs::{
    BranchName, for_ref, parse_id, patchset_branch, ticket_branch, ticket_head, tracking_branch,
};
use crate::git::shell::Git;
use crate::say;

/// Push target when neither the argument nor the branch names a ticket.
const NEW_TICKET: &str = "new";

/// Resolves the proposal target.
#[must_use]
pub fn proposal_target(explicit: Option<&str>, current: &BranchName) -> String {
    explicit.map_or_else(
        || {
            current
                .proposal_ticket()
                .map_or_else(|| NEW_TICKET.to_string(), |id| id.to_string())
        },
        str::to_string,
    )
}

/// Main handler for the propose command.
///
/// # Errors
///
/// Returns an error if tracked files are modified (without `--ignore`),
/// `PatchsetExists` when the target ticket already has patchsets, or an
/// error if `git push` fails. Setting up the upstream afterwards never fails
/// the command.
pub async fn run_propose_command(args: &ProposeArgs, git: &Git) -> Result<()> {
    git.ensure_clean("propose", Override::Ignore, args.ignore).await?;
    let remote = git.resolve_remote().await?;
    let current = git.current_branch().await?;
    let target = proposal_target(args.target.as_deref(), &current);

    if let Some(ticket) = parse_id(&target)
        && git.current_patchset(&remote, ticket).await? > 0
    {
        let branch = match current {
            BranchName::Ticket(id) => Some(ticket_branch(id)),
            BranchName::Patchset(id, n) => Some(patchset_branch(id, n)),
            BranchName::Topic(_) | BranchName::Other => None,
        };
        return Err(GitError::PatchsetExists { ticket, branch }.into());
    }

    let refspec = PushParams::from(&args.refs).refspec(&for_ref(&target), &current);
    say!("Pushing your proposal to the '{remote}' repository");
    let output = git
        .command(["push", remote.as_str(), refspec.as_str()])
        .flags(ProcessFlags::ECHO | ProcessFlags::MERGE_STDERR)
        .run()
        .await?;

    match acknowledged_ticket(output.lines())? {
        Some(ticket) => track_ticket(git, &remote, ticket).await,
        None => info!(%target, "no ticket acknowledged in push output"),
    }
    Ok(())
}

/// Fetches the acknowledged ticket branch and makes it the upstream of the
/// current branch, warning instead of failing.
async fn track_ticket(git: &Git, remote: &str, ticket: u64) {
    let tracking = tracking_branch(remote, ticket);
    let fetch_spec = format!("+{}:refs/remotes/{tracking}", ticket_head(ticket));
    let upstream = format!("--set-upstream-to={tracking}");

    let steps: [&[&str]; 2] = [
        &["fetch", remote, fetch_spec.as_str()],
        &["branch", upstream.as_str()],
    ];
    for step in steps {
        let result = git
            .command(step)
            .flags(ProcessFlags::ECHO | ProcessFlags::ALLOW_FAILURE)
            .run()
            .await;
        match result {
            Ok(output) if output.success() => {}
            Ok(output) => {
                warn!(
                    command = %step.join(" "),
                    code = output.exit_code(),
                    "could not track ticket {ticket}"
                );
                return;
            }
            Err(e) => {
                warn!(error = %e, "could not track ticket {ticket}");
                return;
            }
        }
    }
    info!(ticket, %tracking, "branch tracks the proposed ticket");
}
