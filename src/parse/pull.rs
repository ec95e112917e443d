// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git pull` report: fetch section, merge header, stat block.

use serde::Serialize;

use super::diff::{self, DiffResult};
use super::ParseResponse;
use crate::error::ParseError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullResult {
    /// Per-file stat block and totals.
    pub summary: DiffResult,
    /// Files added by the merge (`create mode ...`).
    pub created: Vec<String>,
    /// Files removed by the merge (`delete mode ...`).
    pub deleted: Vec<String>,
    /// Revision range from `Updating a..b`.
    pub from: Option<String>,
    pub to: Option<String>,
    pub fast_forward: bool,
    pub up_to_date: bool,
    /// Remote URL from the fetch section.
    pub remote: Option<String>,
}

impl PullResult {
    /// Names of the changed files, in stat order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.summary.files.iter().map(|f| f.file.as_str())
    }
}

/// Path after `create mode 100644 ` / `delete mode 100644 `.
fn mode_path<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(prefix)?;
    let (_mode, path) = rest.split_once(' ')?;
    Some(path.trim())
}

impl ParseResponse for PullResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let (summary, _) = diff::scan(text);
        let mut result = Self {
            summary,
            ..Self::default()
        };

        for line in text.lines() {
            let trimmed = line.trim();
            if let Some(url) = trimmed.strip_prefix("From ") {
                result.remote = Some(url.trim().to_string());
            } else if let Some(range) = trimmed.strip_prefix("Updating ") {
                if let Some((from, to)) = range.split_once("..") {
                    result.from = Some(from.to_string());
                    result.to = Some(to.to_string());
                }
            } else if trimmed == "Fast-forward" {
                result.fast_forward = true;
            } else if trimmed.starts_with("Already up to date")
                || trimmed.starts_with("Already up-to-date")
            {
                result.up_to_date = true;
            } else if let Some(path) = mode_path(line, "create mode ") {
                result.created.push(path.to_string());
            } else if let Some(path) = mode_path(line, "delete mode ") {
                result.deleted.push(path.to_string());
            }
        }
        Ok(result)
    }

    fn empty() -> Self {
        Self::default()
    }
}
