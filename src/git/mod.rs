// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!                 command handlers
//!                        |
//!     +--------+---------+---------+--------+
//!     |        |         |         |        |
//!     v        v         v         v        v
//!  remote  patchset    guard    pushref    ack
//!     \        |         /         |
//!      v       v        v          v
//!     ,--------------------,    refs.rs
//!     |  query.rs (reads)  |   (naming,
//!     '---------+----------'  BranchName)
//!               |
//!               v
//!         shell.rs  Git { program, workdir }
//!               |
//!               v
//!       core::process::ProcessBuilder
//! ```
//!
//! Every git interaction is a child process; nothing here reads `.git/`
//! directly.

pub mod ack;
pub mod guard;
pub mod patchset;
pub mod pushref;
pub mod query;
pub mod refs;
pub mod remote;
pub mod shell;

#[cfg(test)]
mod tests;
