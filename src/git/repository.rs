// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository handle: one working directory, one task queue.

use bon::Builder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::backend::{GitExecutor, ShellExecutor};
use super::engine::Engine;
use crate::classify::Classifier;
use crate::command::ArgumentVector;
use crate::error::GitResult;
use crate::parse::ParseResponse;
use crate::queue::{GitFuture, TaskQueue};

/// Construction options for a [`Repository`].
#[derive(Debug, Clone, Builder)]
pub struct RepositoryOptions {
    /// Suppress failure warnings for this handle.
    #[builder(setters(name = with_silent), default = false)]
    silent: bool,
    /// Maximum operations waiting to start; unbounded when unset.
    #[builder(setters(name = with_capacity))]
    capacity: Option<usize>,
    /// Process executor; the git CLI when unset.
    #[builder(setters(name = with_executor))]
    executor: Option<Arc<dyn GitExecutor>>,
    /// Outcome classifier (stderr pattern table).
    #[builder(setters(name = with_classifier), default)]
    classifier: Classifier,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RepositoryOptions {
    /// Returns true if handles built from these options start silent.
    #[must_use]
    pub const fn silent(&self) -> bool {
        self.silent
    }

    /// Returns the queue bound, or `None` for an unbounded queue.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

/// Handle to one working directory.
///
/// Every operation is queued on the handle and runs strictly after the ones
/// issued before it; separate handles run independently. Operations are queued
/// when the method is called, not when the returned future is first polled.
///
/// Dropping the handle lets queued operations finish in the background. Use
/// [`close`](Self::close) to wait for them, or [`shutdown`](Self::shutdown) to
/// abandon those that have not started.
#[derive(Debug)]
pub struct Repository {
    engine: Arc<Engine>,
    queue: TaskQueue,
}

impl Repository {
    /// Opens a handle on `path` with default options.
    ///
    /// The path is not checked; a missing directory surfaces as a spawn error on
    /// the first operation.
    ///
    /// # Errors
    ///
    /// Returns a `QueueError::NoRuntime` error when called outside a Tokio runtime.
    pub fn new(path: impl Into<PathBuf>) -> GitResult<Self> {
        Self::with_options(path, RepositoryOptions::default())
    }

    /// Opens a handle on `path`.
    ///
    /// # Errors
    ///
    /// Returns a `QueueError::NoRuntime` error when called outside a Tokio runtime.
    pub fn with_options(path: impl Into<PathBuf>, options: RepositoryOptions) -> GitResult<Self> {
        let queue = TaskQueue::new(options.capacity)?;
        let executor = options
            .executor
            .unwrap_or_else(|| Arc::new(ShellExecutor::default()));
        let engine = Engine::new(executor, options.classifier, path.into(), options.silent);
        Ok(Self {
            engine: Arc::new(engine),
            queue,
        })
    }

    /// Returns the working directory of this handle.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.engine.cwd()
    }

    /// Returns true if failures are not logged as warnings.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.engine.is_silent()
    }

    /// Enables or disables failure warnings for operations issued from now on.
    #[must_use]
    pub fn silent(mut self, silent: bool) -> Self {
        Arc::make_mut(&mut self.engine).set_silent(silent);
        self
    }

    /// Returns the number of queued or running operations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.pending()
    }

    /// Waits for every queued operation, then releases the handle.
    pub async fn close(self) {
        self.queue.close().await;
    }

    /// Rejects operations that have not started, waits for the running one,
    /// then releases the handle.
    pub async fn shutdown(self) {
        self.queue.shutdown().await;
    }

    /// Queues `argv` and parses its output as `T`.
    pub(super) fn run<T: ParseResponse>(&self, argv: ArgumentVector) -> GitFuture<T> {
        let engine = Arc::clone(&self.engine);
        self.queue
            .enqueue(async move { engine.execute::<T>(argv).await })
    }
}
