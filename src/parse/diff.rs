// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git diff --stat` / `--numstat` summaries.
//!
//! ```text
//!  src/lib.rs          | 4 +++-
//!  logo.png            | Bin 0 -> 1234 bytes
//!  2 files changed, 3 insertions(+), 1 deletion(-)
//! 3<TAB>1<TAB>src/lib.rs
//! -<TAB>-<TAB>logo.png
//! ```

use serde::Serialize;

use super::ParseResponse;
use crate::error::ParseError;

/// One changed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffFile {
    pub file: String,
    pub changes: u64,
    pub insertions: u64,
    pub deletions: u64,
    /// Binary files carry byte sizes instead of line counts.
    pub binary: bool,
    pub before: Option<u64>,
    pub after: Option<u64>,
}

/// Change summary across all files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub files: Vec<DiffFile>,
    /// Number of changed files.
    pub changed: u64,
    pub insertions: u64,
    pub deletions: u64,
}

/// Totals from a `N files changed, X insertions(+), Y deletions(-)` line.
pub(super) fn parse_summary_line(line: &str) -> Option<(u64, u64, u64)> {
    let line = line.trim();
    let mut changed = None;
    let (mut insertions, mut deletions) = (0, 0);
    for part in line.split(", ") {
        let digits = part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(part.len());
        let n: u64 = part[..digits].parse().ok()?;
        let word = part[digits..].trim_start();
        if word.starts_with("file") && word.ends_with("changed") {
            changed = Some(n);
        } else if word.starts_with("insertion") {
            insertions = n;
        } else if word.starts_with("deletion") {
            deletions = n;
        } else {
            return None;
        }
    }
    changed.map(|c| (c, insertions, deletions))
}

/// `path | N +++--` or `path | Bin A -> B bytes`.
fn parse_stat_line(line: &str) -> Option<DiffFile> {
    let (file, stat) = line.rsplit_once(" | ")?;
    let file = file.trim().to_string();
    let stat = stat.trim();

    if let Some(bin) = stat.strip_prefix("Bin") {
        let mut sizes = bin
            .split_whitespace()
            .filter_map(|s| s.parse::<u64>().ok());
        return Some(DiffFile {
            file,
            binary: true,
            before: sizes.next(),
            after: sizes.next(),
            ..DiffFile::default()
        });
    }

    let (count, graph) = stat.split_once(' ').unwrap_or((stat, ""));
    let changes = count.parse().ok()?;
    let graph = graph.trim();
    if !graph.bytes().all(|b| b == b'+' || b == b'-') {
        return None;
    }
    let plus = graph.bytes().filter(|&b| b == b'+').count() as u64;
    let minus = graph.len() as u64 - plus;
    let (insertions, deletions) = graph_counts(changes, plus, minus);
    Some(DiffFile {
        file,
        changes,
        insertions,
        deletions,
        ..DiffFile::default()
    })
}

/// Line counts behind a stat graph of `plus` and `minus` marks.
///
/// Git shrinks the graph to the terminal width, so a graph that does not add
/// up to `changes` is scaled back proportionally.
fn graph_counts(changes: u64, plus: u64, minus: u64) -> (u64, u64) {
    let marks = plus + minus;
    if marks == 0 || marks == changes {
        return (plus, minus);
    }
    let insertions = (changes * plus + marks / 2) / marks;
    (insertions, changes - insertions)
}

/// `added<TAB>deleted<TAB>path`, with `-` for binary files.
fn parse_numstat_line(line: &str) -> Option<DiffFile> {
    let mut parts = line.splitn(3, '\t');
    let (added, deleted, file) = (parts.next()?, parts.next()?, parts.next()?);
    if added == "-" && deleted == "-" {
        return Some(DiffFile {
            file: file.to_string(),
            binary: true,
            ..DiffFile::default()
        });
    }
    let insertions: u64 = added.parse().ok()?;
    let deletions: u64 = deleted.parse().ok()?;
    Some(DiffFile {
        file: file.to_string(),
        changes: insertions + deletions,
        insertions,
        deletions,
        ..DiffFile::default()
    })
}

/// Collects every recognizable stat line of `text`, ignoring everything else.
///
/// Returns the result and whether anything was recognized.
pub(super) fn scan(text: &str) -> (DiffResult, bool) {
    let mut result = DiffResult::default();
    let mut summary = None;

    for line in text.lines() {
        if let Some(totals) = parse_summary_line(line) {
            summary = Some(totals);
        } else if let Some(file) = parse_numstat_line(line).or_else(|| parse_stat_line(line)) {
            result.files.push(file);
        }
    }

    let found = summary.is_some() || !result.files.is_empty();
    if let Some((changed, insertions, deletions)) = summary {
        result.changed = changed;
        result.insertions = insertions;
        result.deletions = deletions;
    } else {
        result.changed = result.files.len() as u64;
        result.insertions = result.files.iter().map(|f| f.insertions).sum();
        result.deletions = result.files.iter().map(|f| f.deletions).sum();
    }
    (result, found)
}

impl ParseResponse for DiffResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let (result, found) = scan(text);
        if !found && !text.trim().is_empty() {
            return Err(ParseError::new("diff", "no stat lines found"));
        }
        Ok(result)
    }

    fn empty() -> Self {
        Self::default()
    }
}
