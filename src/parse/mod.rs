// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response Parsers.
//!
//! ```text
//! Outcome::Success(text) --> T::parse(&text) --> typed result
//! Outcome::EmptySuccess  --> T::empty()      --> canonical empty result
//!
//!   branch  --> BranchSummary     status --> StatusResult (porcelain v1/v2)
//!   diff    --> DiffResult        fetch  --> FetchResult
//!   pull    --> PullResult        tag    --> TagResult
//!   log     --> LogResult         commit --> CommitResult
//!   ()/String/bool for commands with no structured output
//! ```
//!
//! Every parser is a pure function of its input. Unrecognized lines are skipped;
//! a [`ParseError`] is only returned when non-empty output contains nothing
//! the parser recognizes at all.

mod branch;
mod commit;
mod diff;
mod fetch;
mod log;
mod pull;
mod status;
mod tag;

pub use branch::{BranchEntry, BranchSummary};
pub use commit::CommitResult;
pub use diff::{DiffFile, DiffResult};
pub use fetch::{FetchRef, FetchResult, FetchUpdate};
pub use log::{FIELD_DELIMITER, LOG_FORMAT, LogEntry, LogResult, RECORD_DELIMITER};
pub use pull::PullResult;
pub use status::{FileStatus, StatusRename, StatusResult};
pub use tag::TagResult;

use crate::error::ParseError;

/// A result shape that can be produced from classified git output.
pub trait ParseResponse: Sized + Send + 'static {
    /// Parses the text of a successful command.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text does not match the expected grammar.
    fn parse(text: &str) -> Result<Self, ParseError>;

    /// Result for a successful command with nothing to report.
    fn empty() -> Self;
}

impl ParseResponse for () {
    fn parse(_text: &str) -> Result<Self, ParseError> {
        Ok(())
    }

    fn empty() -> Self {}
}

/// Raw output, unmodified.
impl ParseResponse for String {
    fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(text.to_string())
    }

    fn empty() -> Self {
        Self::new()
    }
}

/// `true`/`false` as printed by `rev-parse --is-inside-work-tree` and friends.
impl ParseResponse for bool {
    fn parse(text: &str) -> Result<Self, ParseError> {
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ParseError::new(
                "boolean",
                format!("expected 'true' or 'false', got '{other}'"),
            )),
        }
    }

    fn empty() -> Self {
        false
    }
}

/// Parses the leading unsigned integer of `s`.
fn leading_number(s: &str) -> Option<u64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Returns true if `s` is a non-empty run of hex digits.
fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}
