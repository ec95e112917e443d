// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the repository commands.

use clap::Args;

/// Arguments for `branches`.
#[derive(Debug, Clone, Default, Args)]
pub struct BranchesArgs {
    /// Includes remote-tracking branches.
    #[arg(short = 'a', long)]
    pub all: bool,
}

/// Arguments for `log`.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Limits the number of commits.
    #[arg(short = 'n', long = "max-count", value_name = "N")]
    pub max_count: Option<u32>,

    /// Extra arguments passed to `git log` (revision range, paths, ...).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl LogArgs {
    /// Builds the extra `git log` arguments.
    #[must_use]
    pub fn git_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        if let Some(n) = self.max_count {
            args.push(format!("--max-count={n}"));
        }
        args.extend(self.args.iter().cloned());
        args
    }
}

/// Arguments forwarded verbatim to git.
#[derive(Debug, Clone, Default, Args)]
pub struct PassthroughArgs {
    /// Extra arguments passed to git.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for `fetch` and `pull`.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoteArgs {
    /// Remote name; git's configured default when omitted.
    pub remote: Option<String>,

    /// Branch (refspec) to transfer.
    pub branch: Option<String>,
}
