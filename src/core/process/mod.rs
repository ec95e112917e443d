// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .forward_output()
//!   .run()
//!       --> tokio::process::Command (kill_on_drop)
//!           drain stdout/stderr concurrently
//!       --> ProcessOutcome { exit_code, stdout, stderr, duration }
//! ```

pub mod builder;
mod io;
mod runner;

pub use builder::{ProcessBuilder, ProcessOutcome};
