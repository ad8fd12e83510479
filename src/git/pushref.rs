// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push-ref parameters for ticket field assignments.
//!
//! ```text
//! HEAD:refs/for/new%m=1.2,t=auth,r=bob,cc=alice,cc=carol
//!                  '------------ suffix() ------------'
//! ```

use bon::Builder;

use super::refs::BranchName;

/// Ticket fields assigned while pushing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct PushParams {
    /// `m=`
    pub milestone: Option<String>,
    /// `t=`; defaults to the current `topic/<name>` branch.
    pub topic: Option<String>,
    /// `r=`
    pub responsible: Option<String>,
    /// `cc=`, one pair per entry.
    #[builder(default)]
    pub cc: Vec<String>,
}

impl PushParams {
    /// Builds the `%key=value,...` suffix, empty when nothing applies.
    ///
    /// Without an explicit topic, a non-numeric `topic/<name>` current branch
    /// supplies it.
    #[must_use]
    pub fn suffix(&self, current: &BranchName) -> String {
        let mut params = Vec::new();
        if let Some(m) = &self.milestone {
            params.push(format!("m={m}"));
        }
        if let Some(t) = self.topic.as_deref().or_else(|| current.topic_name()) {
            params.push(format!("t={t}"));
        }
        if let Some(r) = &self.responsible {
            params.push(format!("r={r}"));
        }
        params.extend(self.cc.iter().map(|cc| format!("cc={cc}")));

        if params.is_empty() {
            String::new()
        } else {
            format!("%{}", params.join(","))
        }
    }

    /// Full `HEAD:<target><suffix>` refspec.
    #[must_use]
    pub fn refspec(&self, target: &str, current: &BranchName) -> String {
        format!("HEAD:{target}{}", self.suffix(current))
    }
}
