// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitrun.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitrun.toml (cwd, optional)
//! 3. --config
//! 4. GITRUN_* env vars
//! 5. CLI overrides (--set, -l)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITRUN_GIT__SILENT=true          → git.silent = true
//! GITRUN_GIT__QUEUE_CAPACITY=4     → git.queue_capacity = 4
//! GITRUN_GLOBAL__OUTPUT_LOG_LEVEL=4 → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::classify::{Classifier, StderrPattern};
use crate::error::{ConfigError, Result};
use crate::git::{GitExecutor, RepositoryOptions, ShellExecutor};
use crate::logging::LogConfig;

use loader::ConfigLoader;
use types::{ClassifierConfig, GitConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git process options.
    pub git: GitConfig,
    /// Stderr pattern extensions.
    pub classifier: ClassifierConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitrun::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitrun.toml")
    ///     .with_env_prefix("GITRUN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty binary, a malformed env
    /// entry, a pattern that does not compile or names a non-failure kind.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.git.binary.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "binary".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.git.env_pairs()?;
        self.stderr_patterns()?;
        Ok(())
    }

    /// Compiles the configured stderr patterns, in order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid pattern.
    pub fn stderr_patterns(&self) -> std::result::Result<Vec<StderrPattern>, ConfigError> {
        self.classifier
            .patterns
            .iter()
            .map(|p| {
                p.check_kind()?;
                StderrPattern::new(p.kind, &p.pattern).map_err(|e| ConfigError::InvalidValue {
                    section: "classifier".to_string(),
                    key: "patterns.pattern".to_string(),
                    message: format!("'{}': {e}", p.pattern),
                })
            })
            .collect()
    }

    /// Builds the git executor described by `[git]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a malformed env entry.
    pub fn executor(&self) -> std::result::Result<ShellExecutor, ConfigError> {
        Ok(ShellExecutor::new(self.git.binary.clone())
            .with_env(self.git.env_pairs()?)
            .with_forward_output(self.git.forward_output))
    }

    /// Builds repository handle options from `[git]` and `[classifier]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the executor or classifier
    /// settings are invalid.
    pub fn repository_options(&self) -> std::result::Result<RepositoryOptions, ConfigError> {
        let executor: Arc<dyn GitExecutor> = Arc::new(self.executor()?);
        Ok(RepositoryOptions::builder()
            .with_silent(self.git.silent)
            .maybe_with_capacity(self.git.capacity())
            .with_executor(executor)
            .with_classifier(Classifier::with_patterns(self.stderr_patterns()?))
            .build())
    }

    /// Logging setup described by `[global]`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.output_log_level)
            .with_file_level(self.global.file_log_level)
            .maybe_with_log_file(self.global.log_file.clone())
            .with_file_format(self.global.log_format)
            .with_console_timestamps(self.global.log_timestamps)
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap` and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);
        self.format_classifier_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            u8::from(self.global.output_log_level).to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            u8::from(self.global.file_log_level).to_string(),
        );
        options.insert(
            "global.log_format".into(),
            self.global.log_format.as_str().to_string(),
        );
        options.insert(
            "global.log_timestamps".into(),
            self.global.log_timestamps.to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.binary".into(), self.git.binary.clone());
        options.insert("git.silent".into(), self.git.silent.to_string());
        options.insert(
            "git.queue_capacity".into(),
            self.git.queue_capacity.to_string(),
        );
        options.insert(
            "git.forward_output".into(),
            self.git.forward_output.to_string(),
        );
        if let Ok(executor) = self.executor() {
            for (key, value) in executor.env() {
                options.insert(format!("git.env.{key}"), value.clone());
            }
        }
    }

    fn format_classifier_options(&self, options: &mut BTreeMap<String, String>) {
        for (i, pattern) in self.classifier.patterns.iter().enumerate() {
            options.insert(
                format!("classifier.patterns.{i}"),
                format!("{} {}", pattern.kind, pattern.pattern),
            );
        }
    }
}
