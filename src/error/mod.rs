// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              GitError (~16 bytes)
//!                     |
//!   +--------+--------+--------+--------+------+
//!   |        |        |        |        |      |
//!   v        v        v        v        v      v
//! Process  Command   Parse    Queue   Config  Io
//!   Box      Box      Box      Box     Box    Box
//!
//! Sub-errors:
//!   Process  ExecutableNotFound, SpawnFailed, OutputError
//!   Command  exit code + classified ErrorKind + raw stderr
//!   Parse    stdout did not match the expected grammar
//!   Queue    Full, Closed, NoRuntime
//!   Config   ParseError, InvalidValue, NotFound
//!
//! GitError::kind() --> ErrorKind (flat taxonomy for matching)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitError`].
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Flat error taxonomy used to match on failures without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The external executable could not be started.
    Spawn,
    /// Non-zero exit without a recognized stderr pattern.
    CommandFailed,
    /// The working directory is not inside a repository.
    NotARepository,
    /// The remote rejected the credentials (or none could be supplied).
    AuthenticationFailed,
    /// A merge or pull stopped on conflicts.
    MergeConflict,
    /// The named remote (or remote ref) does not exist.
    RemoteNotFound,
    /// The process succeeded but its output could not be parsed.
    Parse,
    /// A bounded queue rejected a new entry.
    QueueFull,
    /// The queue was shut down before the entry could run.
    QueueClosed,
    /// Invalid configuration.
    Config,
    /// Reading child output failed.
    Io,
}

impl ErrorKind {
    /// Kinds the outcome classifier may assign to a failed command.
    pub const FAILURE_KINDS: [Self; 5] = [
        Self::CommandFailed,
        Self::NotARepository,
        Self::AuthenticationFailed,
        Self::MergeConflict,
        Self::RemoteNotFound,
    ];

    /// Returns true if the classifier may produce this kind.
    #[must_use]
    pub fn is_failure_kind(self) -> bool {
        Self::FAILURE_KINDS.contains(&self)
    }

    /// Returns the `snake_case` name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spawn => "spawn",
            Self::CommandFailed => "command_failed",
            Self::NotARepository => "not_a_repository",
            Self::AuthenticationFailed => "authentication_failed",
            Self::MergeConflict => "merge_conflict",
            Self::RemoteNotFound => "remote_not_found",
            Self::Parse => "parse",
            Self::QueueFull => "queue_full",
            Self::QueueClosed => "queue_closed",
            Self::Config => "config",
            Self::Io => "io",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum GitError {
    /// Process could not be started or its output could not be read.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Git ran and exited with a failure.
    #[error("{0}")]
    Command(#[from] Box<CommandError>),

    /// Git succeeded but the output did not match the expected grammar.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Task queue rejected or dropped the operation.
    #[error("queue error: {0}")]
    Queue(#[from] Box<QueueError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl GitError {
    /// Returns the flat kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Process(e) => match **e {
                ProcessError::OutputError { .. } => ErrorKind::Io,
                _ => ErrorKind::Spawn,
            },
            Self::Command(e) => e.kind,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Queue(e) => match **e {
                QueueError::Full { .. } => ErrorKind::QueueFull,
                QueueError::Closed | QueueError::NoRuntime => ErrorKind::QueueClosed,
            },
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the raw stderr of a failed command, if this error came from one.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Command(e) => Some(&e.stderr),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GitError {
                fn from(err: $error) -> Self {
                    GitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    CommandError => Command,
    ParseError => Parse,
    QueueError => Queue,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Command Errors ---

/// A git invocation that exited unsuccessfully.
#[derive(Debug, Error)]
#[error("git {command} failed with exit code {exit_code} ({kind}): {stderr}")]
pub struct CommandError {
    /// Subcommand name (e.g. `push`).
    pub command: String,
    /// Full argument vector, for diagnostics.
    pub argv: Vec<String>,
    /// Process exit code (-1 if terminated by a signal).
    pub exit_code: i32,
    /// Classified failure kind.
    pub kind: ErrorKind,
    /// Raw diagnostic text reported by git.
    pub stderr: String,
}

// --- Parse Errors ---

/// Output of a successful command did not match the expected grammar.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unexpected {shape} output: {message}")]
pub struct ParseError {
    /// Result shape being parsed (e.g. `log`).
    pub shape: &'static str,
    /// What was wrong.
    pub message: String,
}

impl ParseError {
    pub fn new(shape: &'static str, message: impl Into<String>) -> Self {
        Self {
            shape,
            message: message.into(),
        }
    }
}

// --- Queue Errors ---

/// Task queue errors.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Bounded queue is at capacity.
    #[error("queue is full ({capacity} pending operations)")]
    Full { capacity: usize },

    /// Queue was shut down (or its worker stopped) before the operation completed.
    #[error("queue is closed")]
    Closed,

    /// No Tokio runtime was available to host the queue worker.
    #[error("no tokio runtime available for the queue worker")]
    NoRuntime,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

#[cfg(test)]
mod tests;
