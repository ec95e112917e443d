// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Outcome Classifier.
//!
//! ```text
//! (GitCommand, ProcessOutcome)
//!         |
//!         v
//!   CommandPolicy::for_command()        per-family table
//!         |
//!   exit 0 ----+-- text empty && empty_is_valid --> EmptySuccess
//!              +-- otherwise ---------------------> Success(text)
//!   exit != 0 -+-- nothing-changed marker --------> EmptySuccess
//!              +-- pattern table (stderr, stdout) -> Failure(kind, message)
//!              +-- no match ----------------------> Failure(CommandFailed, message)
//! ```
//!
//! The pattern table holds user patterns (from config) ahead of the built-in
//! ones; the first match wins.

mod patterns;
mod policy;

pub use patterns::StderrPattern;
pub use policy::{CommandPolicy, OutputSource};

use std::sync::Arc;

use crate::command::GitCommand;
use crate::core::process::ProcessOutcome;
use crate::error::ErrorKind;

/// Classification of one completed process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded; the text goes to the response parser.
    Success(String),
    /// The command succeeded with nothing to report; use the canonical empty result.
    EmptySuccess,
    /// The command failed.
    Failure { kind: ErrorKind, message: String },
}

/// Table-driven outcome classifier.
///
/// Cheap to clone; the pattern table is shared.
#[derive(Debug, Clone)]
pub struct Classifier {
    patterns: Arc<[StderrPattern]>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            patterns: patterns::defaults().into(),
        }
    }
}

impl Classifier {
    /// Creates a classifier with only the built-in pattern table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier whose `extra` patterns are checked before the built-ins.
    #[must_use]
    pub fn with_patterns(extra: impl IntoIterator<Item = StderrPattern>) -> Self {
        let patterns: Vec<StderrPattern> = extra
            .into_iter()
            .chain(patterns::defaults())
            .collect();
        Self {
            patterns: patterns.into(),
        }
    }

    /// Returns the active pattern table in match order.
    #[must_use]
    pub fn patterns(&self) -> &[StderrPattern] {
        &self.patterns
    }

    /// Classifies a completed process for `command`.
    #[must_use]
    pub fn classify(&self, command: GitCommand, outcome: &ProcessOutcome) -> Outcome {
        let policy = CommandPolicy::for_command(command);

        if outcome.success() {
            let text = policy.source().select(outcome);
            return if text.trim().is_empty() && policy.empty_is_valid() {
                Outcome::EmptySuccess
            } else {
                Outcome::Success(text)
            };
        }

        if policy.is_nothing_changed(outcome.stdout())
            || policy.is_nothing_changed(outcome.stderr())
        {
            return Outcome::EmptySuccess;
        }

        let kind = self
            .failure_kind(outcome.stderr())
            .or_else(|| self.failure_kind(outcome.stdout()))
            .unwrap_or(ErrorKind::CommandFailed);

        Outcome::Failure {
            kind,
            message: failure_message(outcome),
        }
    }

    /// Returns the kind of the first pattern matching `text`.
    #[must_use]
    pub fn failure_kind(&self, text: &str) -> Option<ErrorKind> {
        if text.is_empty() {
            return None;
        }
        self.patterns
            .iter()
            .find(|p| p.is_match(text))
            .map(StderrPattern::kind)
    }
}

/// Diagnostic text for a failure: stderr, or stdout when git wrote nothing to stderr.
fn failure_message(outcome: &ProcessOutcome) -> String {
    let stderr = outcome.stderr().trim();
    if stderr.is_empty() {
        outcome.stdout().trim().to_string()
    } else {
        stderr.to_string()
    }
}

#[cfg(test)]
mod tests;
