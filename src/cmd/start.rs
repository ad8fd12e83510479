// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Start command implementation.

use crate::cli::ticket::StartArgs;
use crate::error::Result;
use crate::git::refs::{parse_id, ticket_branch, topic_branch};
use crate::git::shell::Git;

/// Local branch a `start` argument maps to: `ticket/<id>` or `topic/<name>`.
#[must_use]
pub fn start_branch(topic: &str) -> String {
    parse_id(topic).map_or_else(|| topic_branch(topic), ticket_branch)
}

/// Main handler for the start command.
///
/// # Errors
///
/// Returns `BranchCollision` when the branch or a conflicting one exists,
/// or an error if `git checkout -b` fails.
pub async fn run_start_command(args: &StartArgs, git: &Git) -> Result<()> {
    let branch = start_branch(&args.topic);
    git.ensure_creatable("creation of the topic branch", &branch, true)
        .await?;
    git.echo(["checkout", "-b", branch.as_str()]).await?;
    Ok(())
}
