// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delimited `git log` records.
//!
//! ```text
//! hash FD date FD subject FD refs FD author FD email FD body RD
//! ```
//!
//! Both delimiters are multi-character sequences around control characters,
//! so a lone separator byte inside a message does not split a record. Fields
//! are split at most seven ways: the body is last and keeps anything left over.

use serde::Serialize;

use super::ParseResponse;
use crate::error::ParseError;

/// Separates fields within a record.
pub const FIELD_DELIMITER: &str = "\x1f;\x1f";

/// Terminates each record.
pub const RECORD_DELIMITER: &str = "\x1e;\x1e";

/// The `--pretty=format:` string matching [`LogEntry`]'s field order.
pub const LOG_FORMAT: &str = "%H\x1f;\x1f%aI\x1f;\x1f%s\x1f;\x1f%D\x1f;\x1f%an\x1f;\x1f%ae\x1f;\x1f%b\x1e;\x1e";

const FIELD_COUNT: usize = 7;

/// One commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub hash: String,
    /// Author date, strict ISO 8601.
    pub date: String,
    /// Subject line.
    pub message: String,
    /// Decorations (`HEAD -> main, tag: v1`).
    pub refs: String,
    pub author_name: String,
    pub author_email: String,
    pub body: String,
}

/// Commits in the order git listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogResult {
    pub all: Vec<LogEntry>,
    /// First listed commit.
    pub latest: Option<LogEntry>,
    pub total: usize,
}

fn parse_record(record: &str) -> Option<LogEntry> {
    let fields: Vec<&str> = record.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    if fields.len() < FIELD_COUNT - 1 {
        return None;
    }
    let hash = fields[0].trim();
    if hash.is_empty() {
        return None;
    }
    Some(LogEntry {
        hash: hash.to_string(),
        date: fields[1].to_string(),
        message: fields[2].to_string(),
        refs: fields[3].to_string(),
        author_name: fields[4].to_string(),
        author_email: fields[5].to_string(),
        body: fields.get(6).map_or_else(String::new, |b| b.trim_end().to_string()),
    })
}

impl ParseResponse for LogResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let all: Vec<LogEntry> = text
            .split(RECORD_DELIMITER)
            .map(|record| record.trim_start_matches(['\n', '\r']))
            .filter(|record| !record.trim().is_empty())
            .filter_map(parse_record)
            .collect();

        if all.is_empty() && !text.trim().is_empty() {
            return Err(ParseError::new("log", "no delimited records found"));
        }

        Ok(Self {
            latest: all.first().cloned(),
            total: all.len(),
            all,
        })
    }

    fn empty() -> Self {
        Self::default()
    }
}
