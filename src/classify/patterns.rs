// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stderr pattern table.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ErrorKind;

/// Built-in patterns, in match order.
///
/// Remote lookups come before the repository check: a bad remote path reports
/// "does not appear to be a git repository", which must not read as a local
/// repository problem.
const DEFAULT_PATTERNS: &[(ErrorKind, &str)] = &[
    (ErrorKind::RemoteNotFound, r"does not appear to be a git repository"),
    (ErrorKind::RemoteNotFound, r"(?i)no such remote"),
    (ErrorKind::RemoteNotFound, r"couldn't find remote ref"),
    (ErrorKind::RemoteNotFound, r"repository '.*' not found"),
    (ErrorKind::AuthenticationFailed, r"(?i)authentication failed"),
    (ErrorKind::AuthenticationFailed, r"could not read Username"),
    (ErrorKind::AuthenticationFailed, r"could not read Password"),
    (ErrorKind::AuthenticationFailed, r"Permission denied \(publickey"),
    (ErrorKind::AuthenticationFailed, r"terminal prompts disabled"),
    (ErrorKind::MergeConflict, r"(?m)^CONFLICT \("),
    (ErrorKind::MergeConflict, r"Automatic merge failed"),
    (ErrorKind::MergeConflict, r"fix conflicts and then commit"),
    (ErrorKind::MergeConflict, r"resolve your current index first"),
    (ErrorKind::MergeConflict, r"you have unmerged files"),
    (ErrorKind::NotARepository, r"(?i)not a git repository"),
];

/// One entry of the pattern table.
#[derive(Debug, Clone)]
pub struct StderrPattern {
    kind: ErrorKind,
    regex: Regex,
}

impl StderrPattern {
    /// Compiles a pattern mapping matches to `kind`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn new(kind: ErrorKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            regex: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(super) fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Returns the compiled built-in table.
pub(super) fn defaults() -> Vec<StderrPattern> {
    static DEFAULTS: OnceLock<Vec<StderrPattern>> = OnceLock::new();
    DEFAULTS
        .get_or_init(|| {
            DEFAULT_PATTERNS
                .iter()
                .filter_map(|(kind, pattern)| StderrPattern::new(*kind, pattern).ok())
                .collect()
        })
        .clone()
}

/// Number of built-in patterns.
#[cfg(test)]
pub(super) const fn default_count() -> usize {
    DEFAULT_PATTERNS.len()
}
