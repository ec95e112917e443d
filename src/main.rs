// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Status | Branches | Tags | Log | ...
//! ```

use std::process::ExitCode;

use gitrun::cli::{self, Command};
use gitrun::cmd::config::{load_config, run_options_command};
use gitrun::cmd::repo::run_repo_command;
use gitrun::config::Config;
use gitrun::config::loader::Source;
use gitrun::git::Repository;
use gitrun::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    if matches!(command, Command::Version) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, sources) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(command, &cli.global.directory, &config, &sources).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(
    command: &Command,
    directory: &std::path::Path,
    config: &Config,
    sources: &[Source],
) -> gitrun::error::Result<()> {
    if let Command::Options(args) = command {
        run_options_command(config, sources, args);
        return Ok(());
    }

    let repo = Repository::with_options(directory, config.repository_options()?)?;
    let result = run_repo_command(command, &repo).await;
    repo.close().await;
    result
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
