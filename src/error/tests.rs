// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    CommandError, ConfigError, ErrorKind, GitError, GitResult, ParseError, ProcessError,
    QueueError,
};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "git".to_string(),
        key: "queue_capacity".to_string(),
        message: "must be a number".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'queue_capacity' in section '[git]': must be a number"
    );
}

#[test]
fn test_command_error_display() {
    let err = GitError::from(CommandError {
        command: "status".to_string(),
        argv: vec!["status".to_string()],
        exit_code: 128,
        kind: ErrorKind::NotARepository,
        stderr: "fatal: not a git repository".to_string(),
    });
    insta::assert_snapshot!(
        err.to_string(),
        @"git status failed with exit code 128 (not_a_repository): fatal: not a git repository"
    );
    assert_eq!(err.stderr(), Some("fatal: not a git repository"));
}

#[test]
fn test_error_kinds() {
    let spawn = GitError::from(ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    });
    let output = GitError::from(ProcessError::OutputError {
        command: "git".to_string(),
        message: "broken pipe".to_string(),
    });
    let parse = GitError::from(ParseError::new("log", "no records"));
    let full = GitError::from(QueueError::Full { capacity: 2 });
    let closed = GitError::from(QueueError::Closed);

    assert_eq!(spawn.kind(), ErrorKind::Spawn);
    assert_eq!(output.kind(), ErrorKind::Io);
    assert_eq!(parse.kind(), ErrorKind::Parse);
    assert_eq!(full.kind(), ErrorKind::QueueFull);
    assert_eq!(closed.kind(), ErrorKind::QueueClosed);
    assert!(spawn.stderr().is_none());
}

#[test]
fn test_failure_kinds() {
    assert!(ErrorKind::MergeConflict.is_failure_kind());
    assert!(ErrorKind::CommandFailed.is_failure_kind());
    assert!(!ErrorKind::Spawn.is_failure_kind());
    assert!(!ErrorKind::Parse.is_failure_kind());
}

#[test]
fn test_git_error_size() {
    let size = std::mem::size_of::<GitError>();
    assert!(size <= 16, "GitError is {size} bytes, expected <= 16");
}

#[test]
fn test_git_result_size() {
    let size = std::mem::size_of::<GitResult<()>>();
    assert!(size <= 16, "GitResult<()> is {size} bytes, expected <= 16");
}
