// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gitrun.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, GitConfig, ClassifierConfig
//! ClassifierConfig: [PatternConfig { kind, pattern }]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, ErrorKind};
use crate::logging::{LogFormat, LogLevel};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file sink when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// `text` or `json` lines in the log file.
    pub log_format: LogFormat,
    /// Prefix console lines with a timestamp.
    pub log_timestamps: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
            log_format: LogFormat::Text,
            log_timestamps: false,
        }
    }
}

/// Git process options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Executable name (resolved through PATH) or path.
    pub binary: String,
    /// Suppress failure warnings for handles built from this config.
    pub silent: bool,
    /// Maximum queued operations per handle; 0 means unbounded.
    pub queue_capacity: usize,
    /// Trace each stdout/stderr line of the child.
    pub forward_output: bool,
    /// `KEY=VALUE` environment overrides.
    pub env: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
            silent: false,
            queue_capacity: 0,
            forward_output: false,
            env: Vec::new(),
        }
    }
}

impl GitConfig {
    /// Returns the queue bound, or `None` for an unbounded queue.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        match self.queue_capacity {
            0 => None,
            n => Some(n),
        }
    }

    /// Splits the `KEY=VALUE` entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an entry without `=` or with an
    /// empty key.
    pub fn env_pairs(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.env
            .iter()
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    Ok((key.trim().to_string(), value.to_string()))
                }
                _ => Err(ConfigError::InvalidValue {
                    section: "git".to_string(),
                    key: "env".to_string(),
                    message: format!("expected KEY=VALUE, got '{entry}'"),
                }),
            })
            .collect()
    }
}

/// Extensions to the stderr pattern table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Checked before the built-in patterns, in order.
    pub patterns: Vec<PatternConfig>,
}

/// One extra stderr pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Failure kind assigned on a match.
    pub kind: ErrorKind,
    /// Regular expression matched against the diagnostic text.
    pub pattern: String,
}

impl PatternConfig {
    /// Checks that the kind is one the classifier may assign.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending kind.
    pub fn check_kind(&self) -> Result<(), ConfigError> {
        if self.kind.is_failure_kind() {
            return Ok(());
        }
        let allowed = ErrorKind::FAILURE_KINDS
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ConfigError::InvalidValue {
            section: "classifier".to_string(),
            key: "patterns.kind".to_string(),
            message: format!("'{}' is not a failure kind (expected one of {allowed})", self.kind),
        })
    }
}
