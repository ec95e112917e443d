// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitrun using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitrun [global options] <command>
//! status
//! branches [--all]
//! tags
//! log [-n N] [args...]
//! diff-summary [args...]
//! fetch [remote] [branch]
//! pull [remote] [branch]
//! is-repo
//! options
//! version
//! ```

pub mod global;
pub mod repo;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::repo::{BranchesArgs, LogArgs, PassthroughArgs, RemoteArgs};
use clap::{Args, Parser, Subcommand};

/// Async git command runner with typed porcelain parsing.
#[derive(Debug, Parser)]
#[command(
    name = "gitrun",
    author,
    version,
    about = "Async git command runner",
    long_about = "gitrun Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs git in a working directory and prints the parsed result\n\
                  as JSON. See `gitrun <command> --help` for more information\n\
                  about a command.",
    after_help = "CONFIG FILES:\n\n\
                  gitrun reads `gitrun.toml` from the current directory if it\n\
                  exists, then the file given with --config, then GITRUN_*\n\
                  environment variables (GITRUN_GIT__SILENT=true sets git.silent).\n\
                  --set and --log-level override all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options(OptionsArgs),

    /// Shows the working tree status.
    Status,

    /// Lists branches.
    Branches(BranchesArgs),

    /// Lists tags.
    Tags,

    /// Shows the commit log.
    Log(LogArgs),

    /// Summarizes `git diff --stat`.
    #[command(name = "diff-summary")]
    DiffSummary(PassthroughArgs),

    /// Fetches from a remote.
    Fetch(RemoteArgs),

    /// Pulls from a remote.
    Pull(RemoteArgs),

    /// Prints whether the directory is inside a work tree.
    #[command(name = "is-repo")]
    IsRepo,
}

/// Arguments for `options`.
#[derive(Debug, Default, Args)]
pub struct OptionsArgs {
    /// Also list where the values came from, lowest priority first.
    #[arg(long)]
    pub sources: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
