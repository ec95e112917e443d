// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request pipeline: argv --> execute --> classify --> parse.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Instrument, debug, debug_span, warn};

use super::backend::GitExecutor;
use crate::classify::{Classifier, Outcome};
use crate::command::ArgumentVector;
use crate::error::{CommandError, GitError, GitResult};
use crate::parse::ParseResponse;

/// Everything a queued operation needs, shared by all operations of one handle.
#[derive(Debug, Clone)]
pub(super) struct Engine {
    executor: Arc<dyn GitExecutor>,
    classifier: Classifier,
    cwd: PathBuf,
    silent: bool,
}

impl Engine {
    pub(super) fn new(
        executor: Arc<dyn GitExecutor>,
        classifier: Classifier,
        cwd: PathBuf,
        silent: bool,
    ) -> Self {
        Self {
            executor,
            classifier,
            cwd,
            silent,
        }
    }

    pub(super) const fn cwd(&self) -> &PathBuf {
        &self.cwd
    }

    pub(super) const fn is_silent(&self) -> bool {
        self.silent
    }

    pub(super) const fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    /// Runs one request to completion.
    pub(super) async fn execute<T: ParseResponse>(&self, argv: ArgumentVector) -> GitResult<T> {
        let command = argv.command();
        let span = debug_span!("git", command = %command);
        async move {
            debug!(cwd = %self.cwd.display(), argv = %argv, "run");

            let outcome = self
                .executor
                .execute(argv.as_slice().to_vec(), self.cwd.clone())
                .await?;

            match self.classifier.classify(command, &outcome) {
                Outcome::Success(text) => T::parse(&text).map_err(|e| {
                    if !self.silent {
                        warn!(error = %e, "unparseable output");
                    }
                    GitError::from(e)
                }),
                Outcome::EmptySuccess => {
                    debug!("nothing to report");
                    Ok(T::empty())
                }
                Outcome::Failure { kind, message } => {
                    if !self.silent {
                        warn!(exit_code = outcome.exit_code(), %kind, "{message}");
                    }
                    Err(CommandError {
                        command: command.as_str().to_string(),
                        argv: argv.into_vec(),
                        exit_code: outcome.exit_code(),
                        kind,
                        stderr: message,
                    }
                    .into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
