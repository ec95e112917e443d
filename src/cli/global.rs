// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR            ← working directory for git
//! --config FILE     ← config file (after ./gitrun.toml)
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← file verbosity (falls back to --log-level)
//! --log-file FILE   ← global.log_file override
//! --silent          ← git.silent override
//! --set KEY=VAL     ← direct config override
//!
//! Precedence: CLI flags > --set > env > --config > gitrun.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Runs git as if started in DIR.
    #[arg(short = 'C', value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Path to a TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skips ./gitrun.toml and reads only --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Suppresses warnings for failed git commands.
    #[arg(short = 'q', long)]
    pub silent: bool,

    /// Sets an option, such as 'git.queue_capacity=4'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            config: None,
            no_default_config: false,
            log_level: None,
            file_log_level: None,
            log_file: None,
            silent: false,
            options: Vec::new(),
        }
    }
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// `--set` entries come first so the dedicated flags win.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a `--set` entry without `=` or
    /// without a `section.key` name.
    pub fn to_config_overrides(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let mut overrides = self
            .options
            .iter()
            .map(String::as_str)
            .map(parse_override)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".into(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".into(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string()));
        }

        if self.silent {
            overrides.push(("git.silent".into(), "true".into()));
        }

        Ok(overrides)
    }
}

/// Splits `section.key=value`; `section/key=value` is accepted too.
fn parse_override(option: &str) -> Result<(String, String), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "--set".to_string(),
        message: format!("{message}: '{option}'"),
    };

    let (key, value) = option
        .split_once('=')
        .ok_or_else(|| invalid("expected KEY=VALUE"))?;
    let key = key.trim().replace('/', ".");
    match key.split_once('.') {
        Some((section, name)) if !section.is_empty() && !name.is_empty() => {
            Ok((key, value.to_string()))
        }
        _ => Err(invalid("expected a section.key name")),
    }
}
