// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core runtime pieces shared by the engine.
//!
//! ```text
//!      core
//!       |
//!       v
//!    process
//!       |
//!   ProcessBuilder --> ProcessOutcome
//! ```

pub mod process;
