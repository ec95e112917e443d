// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-command-family classification policy.

use crate::command::GitCommand;
use crate::core::process::ProcessOutcome;

/// Which captured stream carries the parseable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    /// Only stdout.
    Stdout,
    /// stdout followed by stderr (transfer commands report refs on stderr).
    Both,
}

impl OutputSource {
    pub(super) fn select(self, outcome: &ProcessOutcome) -> String {
        match self {
            Self::Stdout => outcome.stdout().to_string(),
            Self::Both => {
                let capacity = outcome.stdout().len() + outcome.stderr().len() + 1;
                let mut text = String::with_capacity(capacity);
                text.push_str(outcome.stdout());
                if !text.is_empty() && !text.ends_with('\n') && !outcome.stderr().is_empty() {
                    text.push('\n');
                }
                text.push_str(outcome.stderr());
                text
            }
        }
    }
}

/// How one command family treats empty output and non-zero exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPolicy {
    empty_is_valid: bool,
    source: OutputSource,
    nothing_changed: &'static [&'static str],
}

const COMMIT_NOTHING_CHANGED: &[&str] = &[
    "nothing to commit",
    "nothing added to commit",
    "no changes added to commit",
];

impl CommandPolicy {
    /// Listings and diffs: empty output is a clean tree / no entries.
    pub const QUERY: Self = Self {
        empty_is_valid: true,
        source: OutputSource::Stdout,
        nothing_changed: &[],
    };

    /// Commands whose answer must be present on stdout.
    pub const STRICT: Self = Self {
        empty_is_valid: false,
        source: OutputSource::Stdout,
        nothing_changed: &[],
    };

    /// Network transfers: progress and ref updates arrive on stderr; nothing new is valid.
    pub const TRANSFER: Self = Self {
        empty_is_valid: true,
        source: OutputSource::Both,
        nothing_changed: &[],
    };

    /// Commit: exit 1 with a nothing-to-commit notice, or a `--quiet` commit, is an empty success.
    pub const COMMIT: Self = Self {
        empty_is_valid: true,
        source: OutputSource::Stdout,
        nothing_changed: COMMIT_NOTHING_CHANGED,
    };

    /// State mutations that usually print nothing.
    pub const MUTATION: Self = Self {
        empty_is_valid: true,
        source: OutputSource::Stdout,
        nothing_changed: &[],
    };

    /// Returns the policy for `command`.
    #[must_use]
    pub const fn for_command(command: GitCommand) -> Self {
        match command {
            GitCommand::Branch
            | GitCommand::CatFile
            | GitCommand::Diff
            | GitCommand::Log
            | GitCommand::Status
            | GitCommand::Tag => Self::QUERY,
            GitCommand::RevParse => Self::STRICT,
            GitCommand::Clone | GitCommand::Fetch | GitCommand::Pull | GitCommand::Push => {
                Self::TRANSFER
            }
            GitCommand::Commit => Self::COMMIT,
            GitCommand::Add
            | GitCommand::Checkout
            | GitCommand::Config
            | GitCommand::Init
            | GitCommand::Merge
            | GitCommand::Remote => Self::MUTATION,
        }
    }

    #[must_use]
    pub const fn empty_is_valid(&self) -> bool {
        self.empty_is_valid
    }

    #[must_use]
    pub const fn source(&self) -> OutputSource {
        self.source
    }

    /// Returns true if `text` says the command had nothing to do.
    #[must_use]
    pub fn is_nothing_changed(&self, text: &str) -> bool {
        self.nothing_changed.iter().any(|marker| text.contains(marker))
    }
}
