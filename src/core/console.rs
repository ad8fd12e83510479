// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing lines on stdout.
//!
//! A reader that goes away early (`pt co 5 | head -1`) is not an error; other
//! write failures are logged and otherwise ignored.

use std::fmt;
use std::io::{ErrorKind, Write};

use tracing::warn;

/// Writes one line to stdout.
pub fn write_line(args: fmt::Arguments<'_>) {
    if let Err(e) = write_to(&mut std::io::stdout().lock(), args)
        && e.kind() != ErrorKind::BrokenPipe
    {
        warn!(error = %e, "failed to write to stdout");
    }
}

fn write_to<W: Write>(out: &mut W, args: fmt::Arguments<'_>) -> std::io::Result<()> {
    out.write_fmt(args)?;
    out.write_all(b"\n")
}

/// `println!` for messages that must not panic when stdout is closed.
#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        $crate::core::console::write_line(format_args!($($arg)*))
    };
}
