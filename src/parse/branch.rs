// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git branch -v --no-abbrev` listing.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{ParseResponse, is_hex};
use crate::error::ParseError;

/// One listed branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchEntry {
    pub current: bool,
    pub name: String,
    pub commit: String,
    pub label: String,
}

/// Branch listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchSummary {
    /// HEAD is not on a branch.
    pub detached: bool,
    /// Name of the checked-out branch (the detached description when detached).
    pub current: String,
    /// Branch names in listing order.
    pub all: Vec<String>,
    pub branches: BTreeMap<String, BranchEntry>,
}

impl BranchSummary {
    /// Looks up a branch by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BranchEntry> {
        self.branches.get(name)
    }
}

/// Parses one listing line; the flag is set when the entry is a detached HEAD.
fn parse_line(line: &str) -> Option<(BranchEntry, bool)> {
    let marker = line.get(..2)?;
    let current = marker == "* ";
    if !current && marker != "  " && marker != "+ " {
        return None;
    }
    let rest = line[2..].trim_start();

    let (detached, name, rest) = if let Some(inner) = rest.strip_prefix('(') {
        let close = inner.find(')')?;
        (true, inner[..close].to_string(), &inner[close + 1..])
    } else {
        let end = rest.find(char::is_whitespace)?;
        (false, rest[..end].to_string(), &rest[end..])
    };

    let rest = rest.trim_start();
    let (commit, label) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    // Symbolic refs ("origin/HEAD -> origin/main") carry no commit.
    if !is_hex(commit) {
        return None;
    }
    let entry = BranchEntry {
        current,
        name,
        commit: commit.to_string(),
        label: label.trim().to_string(),
    };
    Some((entry, detached))
}

impl ParseResponse for BranchSummary {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let mut summary = Self::default();
        for line in text.lines() {
            let Some((entry, detached)) = parse_line(line) else {
                continue;
            };
            if entry.current {
                summary.current.clone_from(&entry.name);
                summary.detached = detached;
            }
            if !summary.branches.contains_key(&entry.name) {
                summary.all.push(entry.name.clone());
            }
            summary.branches.insert(entry.name.clone(), entry);
        }
        Ok(summary)
    }

    fn empty() -> Self {
        Self::default()
    }
}
