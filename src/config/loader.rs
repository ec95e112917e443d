// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("gitrun.toml")   Source::OptionalFile
//!   .add_toml_file(--config)                 Source::File
//!   .with_env_prefix("GITRUN")               Source::Environment
//!   .set("git.silent", true)                 Source::Override
//!   .build() --> deserialize --> validate --> Config
//! ```

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Config;
use crate::error::Result;

/// One layer of the merged configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file that must exist.
    File(PathBuf),
    /// A file that existed when it was added.
    OptionalFile(PathBuf),
    /// TOML text passed directly.
    Inline,
    /// `{prefix}_SECTION__KEY` variables.
    Environment(String),
    /// A single `section.key` value.
    Override(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::OptionalFile(path) => write!(f, "file {} (optional)", path.display()),
            Self::Inline => f.write_str("inline"),
            Self::Environment(prefix) => write!(f, "env {prefix}_*"),
            Self::Override(key) => write!(f, "override {key}"),
        }
    }
}

/// Collects sources, lowest priority first. Overrides always win.
#[derive(Debug)]
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<Source>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Adds a TOML file that `build()` fails without.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.add_file(path, true);
        loader.sources.push(Source::File(path.to_path_buf()));
        loader
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.add_file(path, false);
        if path.is_file() {
            loader.sources.push(Source::OptionalFile(path.to_path_buf()));
        }
        loader
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(Source::Inline);
        self
    }

    /// Reads `{prefix}_SECTION__KEY` variables, e.g. `GITRUN_GIT__QUEUE_CAPACITY`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.sources.push(Source::Environment(prefix.to_string()));
        self
    }

    /// Overrides `key` (`section.key`) regardless of every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid path expression.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override for '{key}'"))?;
        self.sources.push(Source::Override(key.to_string()));
        Ok(self)
    }

    /// Merges every source into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a source is not valid
    /// TOML, the merged values do not match [`Config`], or
    /// [`Config::validate`] rejects them.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        let config: Config = builder
            .build()
            .context("failed to load configuration sources")?
            .try_deserialize()
            .context("configuration does not match the expected structure")?;
        config.validate()?;
        debug!(sources = self.sources.len(), "configuration loaded");
        Ok(config)
    }

    /// Returns the sources added so far, lowest priority first.
    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
