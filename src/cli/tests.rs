// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["gitrun", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_options_sources() {
    let cli = Cli::try_parse_from(["gitrun", "options", "--sources"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options(ref args)) if args.sources));
    let cli = Cli::try_parse_from(["gitrun", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options(ref args)) if !args.sources));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "gitrun",
        "-C",
        "/tmp/repo",
        "--config",
        "ci.toml",
        "-l",
        "4",
        "--set",
        "git.queue_capacity=2",
        "status",
    ])
    .unwrap();
    assert_eq!(cli.global.directory, PathBuf::from("/tmp/repo"));
    assert_eq!(cli.global.config, Some(PathBuf::from("ci.toml")));
    assert_eq!(cli.global.log_level, Some(4));
    assert!(matches!(cli.command, Some(Command::Status)));
}

#[test]
fn test_default_directory() {
    let cli = Cli::try_parse_from(["gitrun", "is-repo"]).unwrap();
    assert_eq!(cli.global.directory, PathBuf::from("."));
    assert!(matches!(cli.command, Some(Command::IsRepo)));
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["gitrun", "-l", "7", "status"]).is_err());
}

#[test]
fn test_parse_log_passthrough() {
    let cli = Cli::try_parse_from(["gitrun", "log", "-n", "5", "--first-parent", "main"]).unwrap();
    let Some(Command::Log(args)) = cli.command else {
        panic!("expected log command");
    };
    assert_eq!(args.git_args(), vec!["--max-count=5", "--first-parent", "main"]);
}

#[test]
fn test_parse_diff_summary_hyphen_args() {
    let cli = Cli::try_parse_from(["gitrun", "diff-summary", "--cached", "HEAD~1"]).unwrap();
    let Some(Command::DiffSummary(args)) = cli.command else {
        panic!("expected diff-summary command");
    };
    assert_eq!(args.args, vec!["--cached", "HEAD~1"]);
}

#[test]
fn test_parse_fetch_positionals() {
    let cli = Cli::try_parse_from(["gitrun", "fetch", "origin", "main"]).unwrap();
    let Some(Command::Fetch(args)) = cli.command else {
        panic!("expected fetch command");
    };
    assert_eq!(args.remote.as_deref(), Some("origin"));
    assert_eq!(args.branch.as_deref(), Some("main"));

    let cli = Cli::try_parse_from(["gitrun", "pull"]).unwrap();
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull command");
    };
    assert!(args.remote.is_none() && args.branch.is_none());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "gitrun",
        "-l",
        "2",
        "--silent",
        "--set",
        "git/binary=/opt/git/bin/git",
        "branches",
        "--all",
    ])
    .unwrap();
    let overrides = cli.global.to_config_overrides().unwrap();
    insta::assert_debug_snapshot!(overrides, @r#"
    [
        (
            "git.binary",
            "/opt/git/bin/git",
        ),
        (
            "global.output_log_level",
            "2",
        ),
        (
            "global.file_log_level",
            "2",
        ),
        (
            "git.silent",
            "true",
        ),
    ]
    "#);
}

#[test]
fn test_invalid_override() {
    let cli = Cli::try_parse_from(["gitrun", "--set", "silent", "status"]).unwrap();
    assert!(cli.global.to_config_overrides().is_err());
    let cli = Cli::try_parse_from(["gitrun", "--set", "silent=true", "status"]).unwrap();
    assert!(cli.global.to_config_overrides().is_err());
}
