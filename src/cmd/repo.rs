// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository commands: run one git operation and print the parsed result.

use anyhow::bail;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::Command;
use crate::command::GitOptions;
use crate::error::Result;
use crate::git::Repository;

/// Runs `command` against `repo` and returns the result as JSON.
///
/// # Errors
///
/// Returns an error if git fails or its output cannot be parsed, or if the
/// command does not operate on a repository.
pub async fn query(command: &Command, repo: &Repository) -> Result<Value> {
    debug!(path = %repo.path().display(), ?command, "query");
    match command {
        Command::Status => to_json(&repo.status().await?),
        Command::Branches(args) => {
            let summary = if args.all {
                repo.branch(GitOptions::None).await?
            } else {
                repo.branch_local().await?
            };
            to_json(&summary)
        }
        Command::Tags => to_json(&repo.tags(GitOptions::None).await?),
        Command::Log(args) => to_json(&repo.log(args.git_args()).await?),
        Command::DiffSummary(args) => to_json(&repo.diff_summary(args.args.clone()).await?),
        Command::Fetch(args) => {
            let result = repo
                .fetch(
                    args.remote.as_deref(),
                    args.branch.as_deref(),
                    GitOptions::None,
                )
                .await?;
            to_json(&result)
        }
        Command::Pull(args) => {
            let result = repo
                .pull(
                    args.remote.as_deref(),
                    args.branch.as_deref(),
                    GitOptions::None,
                )
                .await?;
            to_json(&result)
        }
        Command::IsRepo => to_json(&repo.check_is_repo().await?),
        Command::Version | Command::Options(_) => {
            bail!("'{command:?}' does not operate on a repository")
        }
    }
}

/// Runs `command` and prints the result as pretty JSON.
///
/// # Errors
///
/// See [`query`].
pub async fn run_repo_command(command: &Command, repo: &Repository) -> Result<()> {
    let value = query(command, repo).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
