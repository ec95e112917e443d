// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository handle and public operations.
//!
//! ```text
//!   Repository::status() / log() / pull() / ...      (query.rs, ops.rs)
//!        |  builds ArgumentVector, enqueues eagerly
//!        v
//!   TaskQueue (per handle, FIFO)
//!        |
//!        v
//!   Engine::execute::<T>()
//!        |
//!        +--> dyn GitExecutor ----> ProcessOutcome
//!        +--> Classifier ---------> Success | EmptySuccess | Failure
//!        +--> T::parse / T::empty / CommandError
//!        v
//!   GitFuture<T> resolves
//! ```

pub mod backend;
mod engine;
mod ops;
mod query;
mod repository;

pub use backend::{GitExecutor, ShellExecutor};
pub use repository::{Repository, RepositoryOptions};

#[cfg(test)]
mod tests;
