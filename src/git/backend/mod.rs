// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git executor abstraction layer.
//!
//! ```text
//! Engine --> dyn GitExecutor
//!              |
//!              +-- ShellExecutor (git CLI via ProcessBuilder)
//!              +-- test doubles (canned ProcessOutcome)
//! ```

use futures_util::future::BoxFuture;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::core::process::{ProcessBuilder, ProcessOutcome};
use crate::error::ProcessError;

/// Runs one git argument vector in a working directory.
///
/// Implementors never fail on a non-zero exit; that is reported in the outcome.
pub trait GitExecutor: fmt::Debug + Send + Sync {
    /// Executes `git <args...>` in `cwd`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started or its output cannot be read.
    fn execute(
        &self,
        args: Vec<String>,
        cwd: PathBuf,
    ) -> BoxFuture<'static, Result<ProcessOutcome, ProcessError>>;
}

/// Environment applied to every git process unless overridden.
///
/// Credential prompts are disabled so a missing credential fails instead of
/// blocking, and messages stay untranslated for the parsers.
pub const DEFAULT_ENV: [(&str, &str); 3] = [
    ("GCM_INTERACTIVE", "never"),
    ("GIT_TERMINAL_PROMPT", "0"),
    ("LC_ALL", "C"),
];

/// Shell-based executor spawning the git CLI.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    binary: String,
    env: BTreeMap<String, String>,
    forward_output: bool,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new("git")
    }
}

impl ShellExecutor {
    /// Creates an executor for `binary` (a name resolved through PATH, or a path).
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            env: DEFAULT_ENV
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            forward_output: false,
        }
    }

    /// Adds or replaces environment overrides.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Traces every line git writes.
    #[must_use]
    pub const fn with_forward_output(mut self, forward: bool) -> Self {
        self.forward_output = forward;
        self
    }

    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }
}

impl GitExecutor for ShellExecutor {
    fn execute(
        &self,
        args: Vec<String>,
        cwd: PathBuf,
    ) -> BoxFuture<'static, Result<ProcessOutcome, ProcessError>> {
        let builder = ProcessBuilder::which(&self.binary).map(|builder| {
            builder
                .name("git")
                .args(args)
                .cwd(cwd)
                .envs(self.env.clone())
                .forward_output(self.forward_output)
        });
        Box::pin(async move { builder?.run().await })
    }
}
