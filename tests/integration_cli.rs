// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the command-line interface.
//!
//! Parses realistic argument patterns and runs the built binary against
//! temporary repositories.

use clap::Parser;
use gitrun::cli::{Cli, Command};
use std::path::Path;
use std::process::{Command as Process, Output};

fn gitrun(args: &[&str], cwd: &Path) -> Output {
    Process::new(env!("CARGO_BIN_EXE_gitrun"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GITRUN_GIT__SILENT")
        .output()
        .expect("failed to run gitrun")
}

fn init_repo(dir: &Path) {
    for args in [
        vec!["init", "-q"],
        vec!["symbolic-ref", "HEAD", "refs/heads/main"],
        vec!["config", "user.email", "test@test.com"],
        vec!["config", "user.name", "Test"],
        vec!["config", "commit.gpgsign", "false"],
    ] {
        assert!(
            Process::new("git")
                .args(&args)
                .current_dir(dir)
                .status()
                .unwrap()
                .success()
        );
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["gitrun", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["gitrun"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["gitrun", "rebase"]).is_err());
}

#[test]
fn cli_branches_all() {
    let cli = Cli::try_parse_from(["gitrun", "branches", "--all"]).unwrap();
    let Some(Command::Branches(args)) = cli.command else {
        panic!("expected branches command");
    };
    assert!(args.all);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_prints_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = gitrun(&["version"], dir.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn binary_lists_options() {
    let dir = tempfile::tempdir().unwrap();
    let output = gitrun(
        &["--no-default-config", "--set", "git.queue_capacity=4", "options"],
        dir.path(),
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("git.queue_capacity") && l.ends_with("= 4")));
}

#[test]
fn binary_lists_option_sources() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gitrun.toml"), "[git]\nsilent = true\n").unwrap();
    let output = gitrun(&["-q", "options", "--sources"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let sources: Vec<&str> = stdout.lines().filter(|l| l.starts_with('#')).collect();
    assert_eq!(
        sources,
        [
            "# 1. file gitrun.toml (optional)",
            "# 2. env GITRUN_*",
            "# 3. override git.silent",
        ]
    );
}

#[test]
fn binary_reads_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gitrun.toml"), "[git]\nforward_output = true\n").unwrap();
    let output = gitrun(&["options"], dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("git.forward_output") && l.ends_with("= true")));
}

#[test]
fn binary_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gitrun.toml"), "[git]\nbogus = 1\n").unwrap();
    let output = gitrun(&["options"], dir.path());
    assert!(!output.status.success());
}

#[test]
fn binary_is_repo_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = gitrun(&["-l", "0", "is-repo"], dir.path());
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");

    init_repo(dir.path());
    let output = gitrun(&["-l", "0", "-C", ".", "is-repo"], dir.path());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");
}

#[test]
fn binary_status_json() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path());
    std::fs::write(dir.path().join("new.txt"), "x\n").unwrap();

    let output = gitrun(
        &["-l", "0", "-C", dir.path().to_str().unwrap(), "status"],
        Path::new("/"),
    );
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["not_added"], serde_json::json!(["new.txt"]));
    assert_eq!(status["current"], "main");
}

#[test]
fn binary_failure_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = gitrun(&["-l", "0", "status"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a git repository"));
}
