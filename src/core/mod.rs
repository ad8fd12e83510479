// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core building blocks shared by the command handlers.
//!
//! ```text
//! process   ProcessBuilder -> ProcessOutput { exit_code, lines }
//! console   say!: stdout lines that survive a closed pipe
//! ```

pub mod console;
pub mod process;
