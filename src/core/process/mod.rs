// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning with line capture.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .flag(ECHO | MERGE_STDERR | ALLOW_FAILURE)
//!   .run()
//!       --> tokio::process::Command
//!           stdout (+ stderr when merged) read line by line
//!           trimmed, captured up to the first blank line
//!       --> ProcessOutput { exit_code, lines }
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
