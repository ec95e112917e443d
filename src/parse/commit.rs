// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git commit` report.
//!
//! ```text
//! [main (root-commit) 1a2b3c4] subject
//!  1 file changed, 1 insertion(+)
//!  create mode 100644 a.txt
//! ```

use serde::Serialize;

use super::diff::parse_summary_line;
use super::{ParseResponse, is_hex};
use crate::error::ParseError;

/// Outcome of a commit.
///
/// Empty when git printed no report: nothing to commit, or `--quiet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitResult {
    /// Branch committed to (`detached HEAD` when not on a branch).
    pub branch: String,
    /// Abbreviated hash of the new commit.
    pub commit: String,
    /// First commit in the repository.
    pub root: bool,
    pub changes: u64,
    pub insertions: u64,
    pub deletions: u64,
}

impl CommitResult {
    /// Returns true if git reported no new commit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commit.is_empty()
    }
}

/// Parses `[branch (root-commit) hash] subject`.
fn parse_header(line: &str) -> Option<(String, String, bool)> {
    let inner = line.strip_prefix('[')?;
    let (inner, _subject) = inner.split_once(']')?;
    let (head, hash) = inner.rsplit_once(' ')?;
    if !is_hex(hash) {
        return None;
    }
    let (branch, root) = match head.strip_suffix(" (root-commit)") {
        Some(branch) => (branch, true),
        None => (head, false),
    };
    Some((branch.to_string(), hash.to_string(), root))
}

impl ParseResponse for CommitResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let mut result = Self::default();
        let mut found = false;
        for line in text.lines() {
            if !found && let Some((branch, commit, root)) = parse_header(line) {
                result.branch = branch;
                result.commit = commit;
                result.root = root;
                found = true;
            } else if let Some((changes, insertions, deletions)) = parse_summary_line(line) {
                result.changes = changes;
                result.insertions = insertions;
                result.deletions = deletions;
            }
        }
        if !found {
            return Err(ParseError::new("commit", "missing '[branch hash]' header"));
        }
        Ok(result)
    }

    fn empty() -> Self {
        Self::default()
    }
}
