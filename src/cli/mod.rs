// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line of `pt`.
//!
//! ```text
//! pt [global options] <command>
//! fetch <id>
//! checkout|co <id>
//! pull <id>
//! push|up [<id>]
//! propose [new|<branch>|<id>]
//! start <topic|id>
//! cleanup|rm [<id>]
//! ```

pub mod global;
pub mod push;
pub mod ticket;


use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;
use crate::cli::push::{ProposeArgs, PushArgs};
use crate::cli::ticket::{CheckoutArgs, CleanupArgs, FetchArgs, PullArgs, StartArgs};

/// Patchset Tool
///
/// A git front end for fetching, reviewing and proposing ticket patchsets.
#[derive(Debug, Parser)]
#[command(
    name = "pt",
    author,
    version,
    about = "Patchset Tool",
    long_about = "pt-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  A git front end for ticket patchsets. Patchsets live on the\n\
                  remote under refs/tickets/<id%100>/<id>/<n>; pt fetches them,\n\
                  checks them out on local branches and pushes updates back.",
    after_help = "REMOTE:\n\n\
                  With a single git remote pt uses it. With several, set the one\n\
                  holding the tickets:\n  \
                  git config --local patchsets.remote <remote>",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Accepted before or after the subcommand
    #[command(flatten)]
    pub global: GlobalOptions,

    /// `None` only reaches `main` when clap lets it through
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands and their aliases.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a patchset.
    Fetch(FetchArgs),

    /// Fetch and checkout a patchset on a local branch.
    #[command(visible_alias = "co")]
    Checkout(CheckoutArgs),

    /// Fetch and merge a patchset into the current branch.
    Pull(PullArgs),

    /// Push your patchset update or a patchset rewrite.
    #[command(visible_alias = "up")]
    Push(PushArgs),

    /// Propose a new ticket or the first patchset of an existing one.
    Propose(ProposeArgs),

    /// Start a topic branch.
    Start(StartArgs),

    /// Remove local ticket and patchset branches.
    #[command(visible_alias = "rm")]
    Cleanup(CleanupArgs),
}

/// Rewrites the single-dash `-cc` spelling into `--cc`.
pub fn normalize_args<I, T>(iter: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    iter.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-cc") => OsString::from("--cc"),
            Some(s) if s.starts_with("-cc=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

/// Parses the process arguments, exiting on usage errors.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}

/// Parses `iter`, exiting on usage errors.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::parse_from(normalize_args(iter))
}

/// Parses `iter` without exiting.
///
/// # Errors
///
/// The `clap::Error` for bad arguments, `--help` or `--version`.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_args(iter))
}
