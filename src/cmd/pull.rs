// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pull command implementation.
//!
//! ```text
//! guard --> resolve remote/patchset --> reset --hard
//!   merge:   git pull --commit --no-ff --no-log --no-rebase <remote> <ref>
//!   squash:  git pull --squash --no-log --no-rebase <remote> <ref>
//!
//! <ref> = ticket/<id> for the latest, the patchset ref for -p <n>
//! ```

use crate::cli::ticket::PullArgs;
use crate::error::{Override, Result};
use crate::git::refs::{patchset_ref, ticket_branch};
use crate::git::shell::Git;
use crate::say;

/// Main handler for the pull command.
///
/// # Errors
///
/// Returns an error if tracked files are modified (without `--force`), if
/// the remote or patchset cannot be resolved, or if `git pull` fails.
pub async fn run_pull_command(args: &PullArgs, git: &Git) -> Result<()> {
    git.ensure_clean("pull", Override::Force, args.force).await?;
    let remote = git.resolve_remote().await?;
    let id = args.ticket.id;
    let requested = args.ticket.requested_patchset();
    let patchset = git.resolve_patchset(&remote, id, requested).await?;

    git.run(["reset", "--hard"]).await?;

    say!("Pulling ticket {id} patchset {patchset} from the '{remote}' repository");

    let reference = match requested {
        None => ticket_branch(id),
        Some(_) => patchset_ref(id, patchset),
    };
    git.echo(pull_args(&remote, &reference, args.squash)).await?;
    Ok(())
}

/// Argument list for `git pull` in merge or squash mode.
fn pull_args(remote: &str, reference: &str, squash: bool) -> Vec<String> {
    let mode: &[&str] = if squash {
        &["--squash"]
    } else {
        &["--commit", "--no-ff"]
    };
    std::iter::once("pull")
        .chain(mode.iter().copied())
        .chain(["--no-log", "--no-rebase", remote, reference])
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pull_args;

    #[test]
    fn test_pull_args() {
        assert_eq!(
            pull_args("origin", "ticket/5", false).join(" "),
            "pull --commit --no-ff --no-log --no-rebase origin ticket/5"
        );
        assert_eq!(
            pull_args("origin", "refs/tickets/05/5/2", true).join(" "),
            "pull --squash --no-log --no-rebase origin refs/tickets/05/5/2"
        );
    }
}
