// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ticket acknowledgment scraped from `git push` output.
//!
//! ```text
//! remote: Ticket #17 created
//! remote:   --> #17          <-- only this marker is recognised
//! ```
//!
//! The server reports the ticket a proposal landed on in free text meant
//! for humans. Nothing guarantees that wording, so a miss here must only
//! skip the upstream setup that follows a proposal, never fail the push.

use anyhow::Context;
use regex::Regex;

use crate::error::Result;

/// Ticket id from the first acknowledgment marker in `lines`, if any.
///
/// # Errors
///
/// Fails only if the marker pattern does not compile.
pub fn acknowledged_ticket(lines: &[String]) -> Result<Option<u64>> {
    let regex = Regex::new(r"-->[ \t]*#([0-9]+)")
        .with_context(|| "failed to compile acknowledgment regex")?;

    Ok(lines.iter().find_map(|line| {
        regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .filter(|id: &u64| *id > 0)
    }))
}
