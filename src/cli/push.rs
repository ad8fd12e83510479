// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the commands that push to the remote.
//!
//! ```text
//! push|up [<id>]                 [-f] [-i] [-m M] [-t T] [-r R] [--cc U...]
//! propose [new|<branch>|<id>]         [-i] [-m M] [-t T] [-r R] [--cc U...]
//! ```

use clap::Args;

use crate::git::pushref::PushParams;

/// Ticket field assignments attached to the pushed reference.
#[derive(Debug, Clone, Default, Args)]
pub struct PushRefArgs {
    /// Set the milestone.
    #[arg(short = 'm', long, value_name = "MILESTONE")]
    pub milestone: Option<String>,

    /// Set the topic (default: the current topic branch name).
    #[arg(short = 't', long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Set the responsible user.
    #[arg(short = 'r', long, value_name = "USER")]
    pub responsible: Option<String>,

    /// Users to add to the watch list; also spelled -cc.
    #[arg(long = "cc", value_name = "USER", num_args = 1.., action = clap::ArgAction::Append)]
    pub cc: Vec<String>,
}

impl From<&PushRefArgs> for PushParams {
    fn from(args: &PushRefArgs) -> Self {
        Self::builder()
            .maybe_milestone(args.milestone.clone())
            .maybe_topic(args.topic.clone())
            .maybe_responsible(args.responsible.clone())
            .cc(args.cc.clone())
            .build()
    }
}

/// Arguments for the `push` command.
#[derive(Debug, Clone, Args)]
pub struct PushArgs {
    /// The ticket id (default: inferred from the current branch).
    #[arg(value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub id: Option<u64>,

    /// Rewrite the patchset instead of fast-forwarding it.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Push even though there are uncommitted changes.
    #[arg(short = 'i', long)]
    pub ignore: bool,

    #[command(flatten)]
    pub refs: PushRefArgs,
}

/// Arguments for the `propose` command.
#[derive(Debug, Clone, Args)]
pub struct ProposeArgs {
    /// "new", a branch name, or a ticket id (default: from the current branch, else "new").
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Propose even though there are uncommitted changes.
    #[arg(short = 'i', long)]
    pub ignore: bool,

    #[command(flatten)]
    pub refs: PushRefArgs,
}
