// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (load, options), repo (git queries as JSON)
//! ```

pub mod config;
pub mod repo;
