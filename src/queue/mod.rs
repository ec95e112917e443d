// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-handle FIFO task queue.
//!
//! ```text
//! enqueue(job) ──► flume channel (unbounded | bounded) ──► worker task
//!     │                                                   one job at a time,
//!     │                                                   in enqueue order
//!     ▼                                                        │
//! caller future ◄──────────── oneshot ◄────────────────────────┘
//!
//! close()    : drop sender, worker drains the channel, await worker
//! shutdown() : cancel token, queued jobs resolve QueueClosed,
//!              the running job finishes, await worker
//! ```
//!
//! Dropping a caller future does not stop its job: the job runs to completion so
//! the working directory is left in a known state, and the result is discarded.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use crate::error::{GitError, GitResult, QueueError};

type Job = BoxFuture<'static, ()>;

/// Result future of a queued operation.
///
/// Owns everything it needs, so it may be awaited, moved to another task, or dropped.
pub type GitFuture<T> = BoxFuture<'static, GitResult<T>>;

/// Serializes jobs for one repository handle.
#[derive(Debug)]
pub struct TaskQueue {
    sender: flume::Sender<Job>,
    worker: JoinHandle<()>,
    capacity: Option<usize>,
    pending: Arc<AtomicUsize>,
    sequence: AtomicU64,
    cancel: CancellationToken,
}

impl TaskQueue {
    /// Starts a queue on the current Tokio runtime.
    ///
    /// `capacity` bounds the number of jobs waiting to start; `None` is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::NoRuntime`] when called outside a Tokio runtime.
    pub fn new(capacity: Option<usize>) -> Result<Self, QueueError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| QueueError::NoRuntime)?;
        let (sender, receiver) = match capacity {
            Some(cap) => flume::bounded(cap),
            None => flume::unbounded(),
        };
        let worker = runtime.spawn(run_worker(receiver));
        Ok(Self {
            sender,
            worker,
            capacity,
            pending: Arc::new(AtomicUsize::new(0)),
            sequence: AtomicU64::new(0),
            cancel: CancellationToken::new(),
        })
    }

    /// Returns the bound on waiting jobs, if any.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns the number of jobs enqueued and not yet finished.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Enqueues `job` immediately and returns a future for its result.
    ///
    /// The job is submitted before this function returns, so jobs run in call
    /// order regardless of when (or whether) the returned futures are awaited.
    pub fn enqueue<T, F>(&self, job: F) -> GitFuture<T>
    where
        T: Send + 'static,
        F: Future<Output = GitResult<T>> + Send + 'static,
    {
        let submitted = self.submit(job);
        Box::pin(async move {
            let receiver = submitted?;
            receiver
                .await
                .map_err(|_| GitError::from(QueueError::Closed))?
        })
    }

    fn submit<T, F>(&self, job: F) -> Result<oneshot::Receiver<GitResult<T>>, QueueError>
    where
        T: Send + 'static,
        F: Future<Output = GitResult<T>> + Send + 'static,
    {
        let (result_tx, result_rx) = oneshot::channel();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let pending = Arc::clone(&self.pending);
        let cancel = self.cancel.clone();

        let task: Job = Box::pin(async move {
            let result = if cancel.is_cancelled() {
                trace!(seq, "job rejected after shutdown");
                Err(GitError::from(QueueError::Closed))
            } else {
                trace!(seq, "job started");
                match AssertUnwindSafe(job).catch_unwind().await {
                    Ok(result) => result,
                    Err(_) => {
                        error!(seq, "job panicked");
                        Err(GitError::from(QueueError::Closed))
                    }
                }
            };
            pending.fetch_sub(1, Ordering::AcqRel);
            if result_tx.send(result).is_err() {
                debug!(seq, "caller went away, result discarded");
            }
        });

        self.pending.fetch_add(1, Ordering::AcqRel);
        self.sender.try_send(task).map_err(|e| {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            match e {
                flume::TrySendError::Full(_) => QueueError::Full {
                    capacity: self.capacity.unwrap_or_default(),
                },
                flume::TrySendError::Disconnected(_) => QueueError::Closed,
            }
        })?;
        trace!(seq, "job enqueued");
        Ok(result_rx)
    }

    /// Stops accepting jobs, runs everything already queued, and waits for the worker.
    pub async fn close(self) {
        let Self { sender, worker, .. } = self;
        drop(sender);
        if let Err(e) = worker.await {
            error!(error = %e, "queue worker failed");
        }
    }

    /// Rejects queued jobs with [`QueueError::Closed`], lets the running job
    /// finish, and waits for the worker.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        self.close().await;
    }
}

async fn run_worker(receiver: flume::Receiver<Job>) {
    while let Ok(job) = receiver.recv_async().await {
        job.await;
    }
    trace!("queue worker stopped");
}
