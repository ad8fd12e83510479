// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the commands that work on an existing ticket.
//!
//! ```text
//! fetch    <id> [-p N] [-q]
//! checkout <id> [-p N] [-f] [-q]
//! pull     <id> [-p N] [-f] [-s]
//! cleanup  [<id>] [-f]
//! start    <topic|id>
//! ```

use clap::Args;

/// Ticket id and optional patchset shared by fetch, checkout and pull.
#[derive(Debug, Clone, Args)]
pub struct TicketArgs {
    /// The ticket id.
    #[arg(value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub id: u64,

    /// The patchset number (default: the latest).
    #[arg(short = 'p', long = "patchset", value_name = "N", value_parser = clap::value_parser!(u64))]
    pub patchset: Option<u64>,
}

impl TicketArgs {
    /// Requested patchset, `None` meaning the latest.
    #[must_use]
    pub fn requested_patchset(&self) -> Option<u64> {
        self.patchset.filter(|p| *p > 0)
    }
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub ticket: TicketArgs,

    /// Suppress informational output.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Arguments for the `checkout` command.
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    #[command(flatten)]
    pub ticket: TicketArgs,

    /// Discard local changes and reset the branch to the patchset.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Suppress informational output.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Args)]
pub struct PullArgs {
    #[command(flatten)]
    pub ticket: TicketArgs,

    /// Discard local changes before pulling.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Squash the pulled changes into the working tree without committing.
    #[arg(short = 's', long)]
    pub squash: bool,
}

/// Arguments for the `cleanup` command.
#[derive(Debug, Clone, Args)]
pub struct CleanupArgs {
    /// The ticket id (default: all tickets).
    #[arg(value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub id: Option<u64>,

    /// Delete the branches instead of listing them.
    #[arg(short = 'f', long)]
    pub force: bool,
}

/// Arguments for the `start` command.
#[derive(Debug, Clone, Args)]
pub struct StartArgs {
    /// Topic name, or a ticket id to start a ticket branch.
    #[arg(value_name = "TOPIC")]
    pub topic: String,
}
