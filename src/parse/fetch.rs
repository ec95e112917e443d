// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git fetch` ref-update report (written to stderr by git).
//!
//! ```text
//! From https://host/repo
//!  * [new branch]      dev        -> origin/dev
//!  * [new tag]         v1.0       -> v1.0
//!    1a2b3c4..5d6e7f8  main       -> origin/main
//!  + 1a2b3c4...5d6e7f8 wip        -> origin/wip  (forced update)
//!  - [deleted]         (none)     -> origin/old
//! ```

use serde::Serialize;

use super::{ParseResponse, is_hex};
use crate::error::ParseError;

/// A new or deleted ref.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchRef {
    /// Name on the remote (empty for deletions).
    pub name: String,
    /// Local ref it maps to.
    pub tracking: String,
}

/// An existing ref that moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchUpdate {
    pub name: String,
    pub tracking: String,
    pub from: String,
    pub to: String,
    pub forced: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    /// Remote URL from the `From` line.
    pub remote: Option<String>,
    pub branches: Vec<FetchRef>,
    pub tags: Vec<FetchRef>,
    pub updated: Vec<FetchUpdate>,
    pub deleted: Vec<FetchRef>,
}

impl FetchResult {
    /// Returns true if the fetch brought nothing new.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
            && self.tags.is_empty()
            && self.updated.is_empty()
            && self.deleted.is_empty()
    }

    /// Applies one ref-update line; returns false if the line is not one.
    pub(super) fn apply_line(&mut self, line: &str) -> bool {
        if let Some(url) = line.strip_prefix("From ") {
            self.remote = Some(url.trim().to_string());
            return true;
        }

        let Some((left, right)) = line.split_once(" -> ") else {
            return false;
        };
        let tracking = right.split_whitespace().next().unwrap_or_default().to_string();
        let left = left.trim_start();
        let (flag, left) = match left.chars().next() {
            Some(c @ ('*' | '+' | '-' | '=' | '!' | 't')) if left[1..].starts_with(' ') => {
                (c, left[1..].trim_start())
            }
            _ => (' ', left),
        };

        if let Some(rest) = left.strip_prefix('[') {
            let Some((summary, name)) = rest.split_once(']') else {
                return false;
            };
            let fetched = FetchRef {
                name: name.trim().to_string(),
                tracking,
            };
            match summary {
                "new branch" => self.branches.push(fetched),
                "new tag" => self.tags.push(fetched),
                "deleted" => self.deleted.push(FetchRef {
                    name: String::new(),
                    ..fetched
                }),
                _ => return false,
            }
            return true;
        }

        let (range, name) = left.split_once(char::is_whitespace).unwrap_or((left, ""));
        let forced = flag == '+' || range.contains("...");
        let Some((from, to)) = range
            .split_once("...")
            .or_else(|| range.split_once(".."))
        else {
            return false;
        };
        if !is_hex(from) || !is_hex(to) {
            return false;
        }
        self.updated.push(FetchUpdate {
            name: name.trim().to_string(),
            tracking,
            from: from.to_string(),
            to: to.to_string(),
            forced,
        });
        true
    }
}

impl ParseResponse for FetchResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let mut result = Self::default();
        for line in text.lines() {
            result.apply_line(line);
        }
        Ok(result)
    }

    fn empty() -> Self {
        Self::default()
    }
}
