// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push command implementation.
//!
//! ```text
//! update     git push <remote> HEAD:refs/heads/ticket/<id>[%params]
//! --force    git push <remote> HEAD:refs/for/<id>[%params]      (rewrite)
//! ```

use tracing::info;

use crate::cli::push::PushArgs;
use crate::error::{GitError, Override, Result};
use crate::git::pushref::PushParams;
use crate::git::refs::{for_ref, ticket_head};
use crate::git::shell::Git;
use crate::say;

/// Main handler for the push command.
///
/// Without an explicit id, the ticket comes from the current
/// `ticket/<id>` or `patchset/<id>/<n>` branch.
///
/// # Errors
///
/// Returns `TicketUnresolved` when no ticket can be determined, an error if
/// tracked files are modified (without `--ignore`), or if `git push` fails.
pub async fn run_push_command(args: &PushArgs, git: &Git) -> Result<()> {
    let current = git.current_branch().await?;
    let id = args
        .id
        .or_else(|| current.ticket())
        .ok_or(GitError::TicketUnresolved)?;

    git.ensure_clean("push", Override::Ignore, args.ignore).await?;
    let remote = git.resolve_remote().await?;

    let target = if args.force {
        for_ref(&id.to_string())
    } else {
        ticket_head(id)
    };
    let refspec = PushParams::from(&args.refs).refspec(&target, &current);

    say!("Pushing your patchset to the '{remote}' repository");
    git.echo(["push", remote.as_str(), refspec.as_str()]).await?;
    info!(ticket = id, %refspec, "pushed patchset");
    Ok(())
}
