// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             config / repo (JSON)
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML + GITRUN_* env     |
//!              '-------------+-------------'
//!                            v
//!                    git::Repository
//!               query.rs / ops.rs (public API)
//!                            |
//!                  queue (per-handle FIFO)
//!                            |
//!                      git::Engine
//!          +--------+--------+---------+--------+
//!          v        v                  v        v
//!      command   backend           classify   parse
//!      (argv)   (executor)        (outcome)  (typed results)
//!                   |
//!   +-----------------------------------------+
//!   |  core   process (tokio::process)        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod classify;
pub mod cli;
pub mod cmd;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod parse;
pub mod queue;

pub use command::{GitOptions, OptionMap, OptionValue};
pub use error::{ErrorKind, GitError, GitResult};
pub use git::{Repository, RepositoryOptions};
