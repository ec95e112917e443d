// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for child processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (read_until '\n', raw bytes kept)
//!   wait
//!   join readers --> lossy UTF-8 decode
//!   --> (exit_code, stdout, stderr)
//! ```
//!
//! A read error on either pipe fails the whole run; partial output is never
//! handed to the classifier.

use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

type Reader = JoinHandle<io::Result<Vec<u8>>>;

/// Spawns a task draining one pipe until EOF.
pub(super) fn spawn_reader<R>(
    reader: Option<R>,
    forward: bool,
    process_name: &str,
    stream_name: &'static str,
) -> Option<Reader>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = process_name.to_string();
    reader.map(|reader| {
        tokio::spawn(async move { read_stream(reader, forward, &name, stream_name).await })
    })
}

/// Joins a reader task and decodes its bytes.
pub(super) async fn join_reader(
    handle: Option<Reader>,
    command: &str,
    stream_name: &str,
) -> Result<String, ProcessError> {
    let Some(handle) = handle else {
        return Ok(String::new());
    };
    let output_error = |message: String| ProcessError::OutputError {
        command: command.to_string(),
        message,
    };
    let bytes = handle
        .await
        .map_err(|e| output_error(e.to_string()))?
        .map_err(|e| output_error(format!("{stream_name}: {e}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl ProcessBuilder {
    /// Drains both pipes while waiting for exit.
    ///
    /// Returns the exit code (-1 when terminated by a signal) and the decoded
    /// stdout and stderr.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> Result<(i32, String, String), ProcessError> {
        let forward = self.forwards_output();
        let stdout_handle = spawn_reader(child.stdout.take(), forward, name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), forward, name, "stderr");

        let exit_status = child.wait().await.map_err(|e| ProcessError::OutputError {
            command: name.to_string(),
            message: e.to_string(),
        })?;

        let stdout = join_reader(stdout_handle, name, "stdout").await?;
        let stderr = join_reader(stderr_handle, name, "stderr").await?;
        Ok((exit_status.code().unwrap_or(-1), stdout, stderr))
    }
}

/// Reads a stream to EOF, keeping line endings verbatim.
async fn read_stream<R>(
    reader: R,
    forward: bool,
    process_name: &str,
    stream_name: &str,
) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf_reader = BufReader::new(reader);
    let mut collected = Vec::new();
    let mut line = Vec::new();

    while buf_reader.read_until(b'\n', &mut line).await? > 0 {
        if forward {
            trace!(
                process = %process_name,
                stream = %stream_name,
                line = %String::from_utf8_lossy(&line).trim_end(),
                "output"
            );
        }
        collected.append(&mut line);
    }
    Ok(collected)
}
