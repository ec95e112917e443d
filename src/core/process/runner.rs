// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()
//! args, cwd, env overrides, null stdin, piped output, kill_on_drop
//!   |
//!   v
//! spawn() --(io error)--> ProcessError::SpawnFailed
//!   |
//!   v
//! run_child(): drain stdout + stderr concurrently, wait
//!   |
//!   v
//! ProcessOutcome { exit_code, stdout, stderr, duration }
//! (non-zero exit is returned, never raised)
//! ```

use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutcome};
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(super) fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            use std::fmt::Write as _;
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// Both output pipes are drained while the child runs, so a chatty child
    /// never blocks on a full pipe. The child handle is owned by this future and
    /// created with `kill_on_drop`, so dropping the future mid-run reaps the child
    /// instead of leaving it orphaned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be started or its output
    /// cannot be read. A non-zero exit status is reported in the outcome.
    pub async fn run(self) -> Result<ProcessOutcome, ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let started = Instant::now();
        let mut child = command
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let (exit_code, stdout, stderr) = self.run_child(&name, &mut child).await?;
        let outcome = ProcessOutcome::new(exit_code, stdout, stderr, started.elapsed());

        trace!(
            process = %name,
            exit_code = outcome.exit_code(),
            elapsed_ms = u64::try_from(outcome.duration().as_millis()).unwrap_or(u64::MAX),
            "completed"
        );
        Ok(outcome)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        // Arguments, passed through verbatim with no shell in between
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        // Inherited environment plus overrides
        for (key, value) in self.env_overrides() {
            command.env(key, value);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }
}
