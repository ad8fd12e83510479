// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> git::Git
//!   fetch, checkout, pull, push, propose, start, cleanup
//! ```

pub mod checkout;
pub mod cleanup;
pub mod fetch;
pub mod propose;
pub mod pull;
pub mod push;
pub mod start;

use crate::cli::Command;
use crate::error::Result;
use crate::git::shell::Git;

/// Runs `command` against the working tree of `git`.
///
/// # Errors
///
/// Returns whatever error the selected handler reports.
pub async fn run_command(command: &Command, git: &Git) -> Result<()> {
    match command {
        Command::Fetch(args) => fetch::run_fetch_command(args, git).await,
        Command::Checkout(args) => checkout::run_checkout_command(args, git).await,
        Command::Pull(args) => pull::run_pull_command(args, git).await,
        Command::Push(args) => push::run_push_command(args, git).await,
        Command::Propose(args) => propose::run_propose_command(args, git).await,
        Command::Start(args) => start::run_start_command(args, git).await,
        Command::Cleanup(args) => cleanup::run_cleanup_command(args, git).await,
    }
}
