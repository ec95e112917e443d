// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operations that change repository state.

use futures_util::TryFutureExt;

use super::Repository;
use crate::command::{ArgumentVector, GitCommand, GitOptions};
use crate::parse::{CommitResult, FetchResult, PullResult};
use crate::queue::GitFuture;

/// Appends optional positional arguments (remote, branch) in order.
fn positional(argv: ArgumentVector, values: [Option<&str>; 2]) -> ArgumentVector {
    argv.args(values.into_iter().flatten())
}

impl Repository {
    /// Stages files.
    pub fn add<I, S>(&self, files: I) -> GitFuture<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run(ArgumentVector::new(GitCommand::Add).arg("--").args(files))
    }

    /// Creates an annotated tag.
    pub fn add_annotated_tag(&self, name: &str, message: &str) -> GitFuture<()> {
        let argv = ArgumentVector::new(GitCommand::Tag).args(["-a", "-m", message, name]);
        self.run(argv)
    }

    /// Sets a repository-local config value; resolves to git's output.
    pub fn add_config(&self, key: &str, value: &str) -> GitFuture<String> {
        self.run(ArgumentVector::new(GitCommand::Config).args(["--local", key, value]))
    }

    /// Adds a remote.
    pub fn add_remote(&self, name: &str, url: &str) -> GitFuture<()> {
        self.run(ArgumentVector::new(GitCommand::Remote).args(["add", name, url]))
    }

    /// Creates a lightweight tag; resolves to the tag name.
    pub fn add_tag(&self, name: &str) -> GitFuture<String> {
        let tag = name.to_string();
        let argv = ArgumentVector::new(GitCommand::Tag).arg(name);
        Box::pin(self.run::<()>(argv).map_ok(move |()| tag))
    }

    /// Checks out a branch, tag, commit, or paths.
    pub fn checkout(&self, what: impl Into<GitOptions>) -> GitFuture<()> {
        self.run(ArgumentVector::new(GitCommand::Checkout).options(&what.into()))
    }

    /// Creates `branch` at `start_point` and checks it out.
    pub fn checkout_branch(&self, branch: &str, start_point: &str) -> GitFuture<()> {
        self.run(ArgumentVector::new(GitCommand::Checkout).args(["-b", branch, start_point]))
    }

    /// Creates `branch` at HEAD and checks it out.
    pub fn checkout_local_branch(&self, branch: &str) -> GitFuture<()> {
        self.run(ArgumentVector::new(GitCommand::Checkout).args(["-b", branch]))
    }

    /// Clones `repo` into `local_path` (relative to this handle's directory).
    pub fn clone(
        &self,
        repo: &str,
        local_path: &str,
        options: impl Into<GitOptions>,
    ) -> GitFuture<()> {
        let argv = ArgumentVector::new(GitCommand::Clone)
            .options(&options.into())
            .args(["--", repo, local_path]);
        self.run(argv)
    }

    /// Fetches from `remote` (the configured default when `None`).
    pub fn fetch(
        &self,
        remote: Option<&str>,
        branch: Option<&str>,
        options: impl Into<GitOptions>,
    ) -> GitFuture<FetchResult> {
        let argv = ArgumentVector::new(GitCommand::Fetch).options(&options.into());
        self.run(positional(argv, [remote, branch]))
    }

    /// Merges `from` and `to` into the current branch; resolves to git's output.
    pub fn merge_from_to(
        &self,
        from: &str,
        to: &str,
        options: impl Into<GitOptions>,
    ) -> GitFuture<String> {
        let argv = ArgumentVector::new(GitCommand::Merge)
            .options(&options.into())
            .args([from, to]);
        self.run(argv)
    }

    /// Runs `git merge` with the given options; resolves to git's output.
    pub fn merge(&self, options: impl Into<GitOptions>) -> GitFuture<String> {
        self.run(ArgumentVector::new(GitCommand::Merge).options(&options.into()))
    }

    /// Pulls from `remote`/`branch` (the configured upstream when `None`).
    pub fn pull(
        &self,
        remote: Option<&str>,
        branch: Option<&str>,
        options: impl Into<GitOptions>,
    ) -> GitFuture<PullResult> {
        let argv = ArgumentVector::new(GitCommand::Pull).options(&options.into());
        self.run(positional(argv, [remote, branch]))
    }

    /// Pushes to `remote`/`branch` (the configured upstream when `None`).
    pub fn push(
        &self,
        remote: Option<&str>,
        branch: Option<&str>,
        options: impl Into<GitOptions>,
    ) -> GitFuture<()> {
        let argv = ArgumentVector::new(GitCommand::Push).options(&options.into());
        self.run(positional(argv, [remote, branch]))
    }

    /// Commits staged changes, or only `files` when given.
    ///
    /// Nothing to commit, or `--quiet`, resolves to an empty [`CommitResult`].
    pub fn commit<I, S>(
        &self,
        message: &str,
        files: I,
        options: impl Into<GitOptions>,
    ) -> GitFuture<CommitResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files: Vec<String> = files.into_iter().map(Into::into).collect();
        let argv = ArgumentVector::new(GitCommand::Commit)
            .args(["-m", message])
            .options(&options.into())
            .arg_if(!files.is_empty(), "--")
            .args(files);
        self.run(argv)
    }

    /// Creates a repository in the handle's directory.
    pub fn init(&self, bare: bool) -> GitFuture<()> {
        self.run(ArgumentVector::new(GitCommand::Init).arg_if(bare, "--bare"))
    }
}
