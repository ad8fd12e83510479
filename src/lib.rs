// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `pt`: ticket patchsets on top of plain git.
//!
//! A patchset is a commit published by the review server under
//! `refs/tickets/<id % 100>/<id>/<n>`; the shared line of work for a ticket
//! lives on `refs/heads/ticket/<id>`.
//!
//! ```text
//! cli      argv -> Command                  (clap)
//! cmd      one handler per subcommand
//! git      naming, remote choice, patchset lookup, guards, push suffix
//! core     child processes with line capture
//! config   .pt.toml, --config, PT_* env, flag overrides
//! error    PtError and exit statuses
//! logging  tracing to stderr and an optional file
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
