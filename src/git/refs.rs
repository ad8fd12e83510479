// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reference and branch naming.
//!
//! ```text
//! remote                                   local
//! refs/tickets/<id%100:02>/<id>/<n>  <-->  patchset/<id>/<n>
//! refs/heads/ticket/<id>             <-->  ticket/<id>
//! refs/for/<id|new|branch>                 topic/<name>
//! ```
//!
//! [`BranchName::classify`] is the single place a branch name is
//! interpreted; handlers never pick names apart themselves.

/// Remote reference of a ticket patchset.
#[must_use]
pub fn patchset_ref(ticket: u64, patchset: u64) -> String {
    format!("refs/tickets/{:02}/{ticket}/{patchset}", ticket % 100)
}

/// Pattern matching every patchset reference of a ticket.
#[must_use]
pub fn patchset_glob(ticket: u64) -> String {
    format!("refs/tickets/{:02}/{ticket}/*", ticket % 100)
}

/// Remote branch tracking the latest patchset of a ticket.
#[must_use]
pub fn ticket_head(ticket: u64) -> String {
    format!("refs/heads/ticket/{ticket}")
}

/// Magic reference accepting proposals and patchset rewrites.
#[must_use]
pub fn for_ref(target: &str) -> String {
    format!("refs/for/{target}")
}

/// Remote-tracking name of a ticket branch, e.g. `origin/ticket/5`.
#[must_use]
pub fn tracking_branch(remote: &str, ticket: u64) -> String {
    format!("{remote}/ticket/{ticket}")
}

/// Local branch following a ticket.
#[must_use]
pub fn ticket_branch(ticket: u64) -> String {
    format!("ticket/{ticket}")
}

/// Local branch holding one patchset.
#[must_use]
pub fn patchset_branch(ticket: u64, patchset: u64) -> String {
    format!("patchset/{ticket}/{patchset}")
}

/// Local branch for topic development.
#[must_use]
pub fn topic_branch(name: &str) -> String {
    format!("topic/{name}")
}

/// Parses a positive decimal id made of ASCII digits only.
#[must_use]
pub fn parse_id(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|id| *id > 0)
}

/// Interpretation of a local branch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchName {
    /// `ticket/<id>`
    Ticket(u64),
    /// `patchset/<id>/<n>`
    Patchset(u64, u64),
    /// `topic/<name>`; the name may itself be numeric.
    Topic(String),
    /// Anything else.
    Other,
}

impl BranchName {
    /// Classifies a short branch name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let name = name.trim();
        if let Some(rest) = name.strip_prefix("ticket/") {
            return parse_id(rest).map_or(Self::Other, Self::Ticket);
        }
        if let Some(rest) = name.strip_prefix("patchset/") {
            return rest
                .split_once('/')
                .and_then(|(id, n)| Some(Self::Patchset(parse_id(id)?, parse_id(n)?)))
                .unwrap_or(Self::Other);
        }
        if let Some(rest) = name.strip_prefix("topic/")
            && !rest.is_empty()
        {
            return Self::Topic(rest.to_string());
        }
        Self::Other
    }

    /// Extracts the local branch from a `git status -b -s` header.
    ///
    /// ```text
    /// ## ticket/5...origin/ticket/5 [ahead 1]   -> ticket/5
    /// ## topic/auth                             -> topic/auth
    /// ## No commits yet on main                 -> main
    /// ## HEAD (no branch)                       -> None
    /// ```
    #[must_use]
    pub fn branch_from_status_header(line: &str) -> Option<&str> {
        let header = line.strip_prefix("##")?.trim();
        let header = header
            .strip_prefix("No commits yet on ")
            .or_else(|| header.strip_prefix("Initial commit on "))
            .unwrap_or(header);
        if header.starts_with("HEAD (no branch)") {
            return None;
        }
        let branch = header
            .split_once("...")
            .map_or(header, |(local, _)| local)
            .split_whitespace()
            .next()?;
        Some(branch)
    }

    /// Classifies the branch named by a `git status -b -s` header.
    #[must_use]
    pub fn from_status_header(line: &str) -> Self {
        Self::branch_from_status_header(line).map_or(Self::Other, Self::classify)
    }

    /// Ticket id carried by a ticket or patchset branch.
    #[must_use]
    pub const fn ticket(&self) -> Option<u64> {
        match self {
            Self::Ticket(id) | Self::Patchset(id, _) => Some(*id),
            Self::Topic(_) | Self::Other => None,
        }
    }

    /// Ticket id a proposal from this branch targets: `ticket/<n>` or a
    /// numeric `topic/<n>`.
    #[must_use]
    pub fn proposal_ticket(&self) -> Option<u64> {
        match self {
            Self::Ticket(id) => Some(*id),
            Self::Topic(name) => parse_id(name),
            Self::Patchset(..) | Self::Other => None,
        }
    }

    /// Topic name usable as a push parameter; numeric topics are ticket ids.
    #[must_use]
    pub fn topic_name(&self) -> Option<&str> {
        match self {
            Self::Topic(name) if parse_id(name).is_none() => Some(name),
            _ => None,
        }
    }
}
