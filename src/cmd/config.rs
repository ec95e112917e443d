// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for gitrun.

use anyhow::Context;

use crate::cli::OptionsArgs;
use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::config::loader::{ConfigLoader, Source};
use crate::error::Result;

/// File read from the current directory unless disabled.
pub const DEFAULT_CONFIG_FILE: &str = "gitrun.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GITRUN";

/// Builds the loader for the global options, without reading anything yet.
///
/// # Errors
///
/// Returns an error if an override is malformed.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

/// Loads the effective configuration and the sources it was merged from.
///
/// # Errors
///
/// Returns an error if a source cannot be read or the result is invalid.
pub fn load_config(global: &GlobalOptions) -> Result<(Config, Vec<Source>)> {
    let loader = build_config_loader(global)?;
    let sources = loader.sources().to_vec();
    let config = loader.build().context("failed to load config")?;
    Ok((config, sources))
}

/// Renders `gitrun options`: optionally the sources as `#` lines, then every option.
#[must_use]
pub fn format_options_output(config: &Config, sources: &[Source], args: &OptionsArgs) -> Vec<String> {
    let mut lines = Vec::new();
    if args.sources {
        lines.extend(
            sources
                .iter()
                .enumerate()
                .map(|(i, source)| format!("# {}. {source}", i + 1)),
        );
    }
    lines.extend(config.format_options());
    lines
}

/// Display current configuration options.
pub fn run_options_command(config: &Config, sources: &[Source], args: &OptionsArgs) {
    for line in format_options_output(config, sources, args) {
        println!("{line}");
    }
}
