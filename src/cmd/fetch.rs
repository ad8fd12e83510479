// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch command implementation.
//!
//! ```text
//! latest     git fetch --prune <remote> +refs/heads/ticket/*:refs/remotes/<remote>/ticket/*
//! -p <n>     git fetch <remote> refs/tickets/<id%100>/<id>/<n>   (lands in FETCH_HEAD)
//! ```

use tracing::info;

use crate::cli::ticket::{FetchArgs, TicketArgs};
use crate::error::Result;
use crate::git::refs::patchset_ref;
use crate::git::shell::Git;
use crate::say;

/// Main handler for the fetch command.
///
/// # Errors
///
/// Returns an error if the remote or patchset cannot be resolved, or if
/// `git fetch` fails.
pub async fn run_fetch_command(args: &FetchArgs, git: &Git) -> Result<()> {
    let remote = git.resolve_remote().await?;
    fetch_patchset(git, &remote, &args.ticket, args.quiet).await?;
    Ok(())
}

/// Resolves and fetches the patchset named by `ticket`, returning its number.
///
/// # Errors
///
/// `NoPatchsets` or `PatchsetNotFound` when nothing matches, otherwise any
/// failure of `git fetch`.
pub async fn fetch_patchset(git: &Git, remote: &str, ticket: &TicketArgs, quiet: bool) -> Result<u64> {
    let requested = ticket.requested_patchset();
    let patchset = git.resolve_patchset(remote, ticket.id, requested).await?;

    if !quiet {
        say!(
            "Fetching ticket {} patchset {patchset} from the '{remote}' repository",
            ticket.id
        );
    }

    let mut args = vec!["fetch".to_string()];
    if requested.is_none() {
        args.push("--prune".to_string());
    }
    if quiet {
        args.push("--quiet".to_string());
    }
    args.push(remote.to_string());
    args.push(match requested {
        None => format!("+refs/heads/ticket/*:refs/remotes/{remote}/ticket/*"),
        Some(_) => patchset_ref(ticket.id, patchset),
    });

    git.echo(&args).await?;
    info!(ticket = ticket.id, patchset, remote, "fetched patchset");
    Ok(patchset)
}
