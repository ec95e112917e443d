// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only operations.

use futures_util::TryFutureExt;

use super::Repository;
use crate::command::{ArgumentVector, GitCommand, GitOptions};
use crate::error::ErrorKind;
use crate::parse::{BranchSummary, DiffResult, LOG_FORMAT, LogResult, StatusResult, TagResult};
use crate::queue::GitFuture;

impl Repository {
    /// Lists local and remote-tracking branches (`git branch -a -v`).
    pub fn branch(&self, options: impl Into<GitOptions>) -> GitFuture<BranchSummary> {
        let argv = ArgumentVector::new(GitCommand::Branch)
            .args(["-a", "-v", "--no-abbrev"])
            .options(&options.into());
        self.run(argv)
    }

    /// Lists local branches.
    pub fn branch_local(&self) -> GitFuture<BranchSummary> {
        self.run(ArgumentVector::new(GitCommand::Branch).args(["-v", "--no-abbrev"]))
    }

    /// Returns whether the handle's directory is inside a work tree.
    ///
    /// "Not a repository" is an answer here, not an error.
    pub fn check_is_repo(&self) -> GitFuture<bool> {
        let argv = ArgumentVector::new(GitCommand::RevParse).arg("--is-inside-work-tree");
        Box::pin(self.run::<bool>(argv).or_else(|e| async move {
            if e.kind() == ErrorKind::NotARepository {
                Ok(false)
            } else {
                Err(e)
            }
        }))
    }

    /// Raw `git cat-file` output.
    pub fn cat_file(&self, options: impl Into<GitOptions>) -> GitFuture<String> {
        self.run(ArgumentVector::new(GitCommand::CatFile).options(&options.into()))
    }

    /// Raw `git diff` output.
    pub fn diff(&self, options: impl Into<GitOptions>) -> GitFuture<String> {
        self.run(ArgumentVector::new(GitCommand::Diff).options(&options.into()))
    }

    /// Per-file change counts. Pass `--cached` for staged changes only.
    pub fn diff_summary(&self, options: impl Into<GitOptions>) -> GitFuture<DiffResult> {
        let argv = ArgumentVector::new(GitCommand::Diff)
            .arg("--stat=4096")
            .options(&options.into());
        self.run(argv)
    }

    /// Working tree status, including untracked files and upstream distance.
    pub fn status(&self) -> GitFuture<StatusResult> {
        let argv = ArgumentVector::new(GitCommand::Status).args([
            "--porcelain=v2",
            "--branch",
            "--untracked-files=all",
        ]);
        self.run(argv)
    }

    /// Lists tags.
    pub fn tags(&self, options: impl Into<GitOptions>) -> GitFuture<TagResult> {
        self.run(ArgumentVector::new(GitCommand::Tag).arg("-l").options(&options.into()))
    }

    /// Commit history. Options are appended after the format, e.g. `-n 5` or a range.
    pub fn log(&self, options: impl Into<GitOptions>) -> GitFuture<LogResult> {
        let argv = ArgumentVector::new(GitCommand::Log)
            .arg(format!("--pretty=format:{LOG_FORMAT}"))
            .options(&options.into());
        self.run(argv)
    }
}
