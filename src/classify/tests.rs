// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::{Classifier, CommandPolicy, Outcome, OutputSource, StderrPattern, patterns};
use crate::command::GitCommand;
use crate::core::process::ProcessOutcome;
use crate::error::ErrorKind;

fn outcome(code: i32, stdout: &str, stderr: &str) -> ProcessOutcome {
    ProcessOutcome::new(code, stdout, stderr, Duration::ZERO)
}

fn failure_kind(command: GitCommand, code: i32, stderr: &str) -> ErrorKind {
    match Classifier::new().classify(command, &outcome(code, "", stderr)) {
        Outcome::Failure { kind, .. } => kind,
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_default_patterns_compile() {
    assert_eq!(patterns::defaults().len(), patterns::default_count());
}

#[test]
fn test_clean_status_is_empty_success() {
    let result = Classifier::new().classify(GitCommand::Status, &outcome(0, "", ""));
    assert_eq!(result, Outcome::EmptySuccess);
}

#[test]
fn test_success_passes_stdout() {
    let result = Classifier::new().classify(GitCommand::Tag, &outcome(0, "v1\nv2\n", "noise"));
    assert_eq!(result, Outcome::Success("v1\nv2\n".to_string()));
}

#[test]
fn test_strict_command_keeps_empty_text() {
    let result = Classifier::new().classify(GitCommand::RevParse, &outcome(0, "", ""));
    assert_eq!(result, Outcome::Success(String::new()));
}

#[test]
fn test_transfer_reads_both_streams() {
    let result = Classifier::new().classify(
        GitCommand::Fetch,
        &outcome(0, "", "From /tmp/remote\n * [new branch]      dev        -> origin/dev\n"),
    );
    let Outcome::Success(text) = result else {
        panic!("expected success");
    };
    assert!(text.starts_with("From /tmp/remote"));

    let quiet = Classifier::new().classify(GitCommand::Fetch, &outcome(0, "", ""));
    assert_eq!(quiet, Outcome::EmptySuccess);
}

#[test]
fn test_not_a_repository() {
    assert_eq!(
        failure_kind(GitCommand::Status, 128, "fatal: not a git repository"),
        ErrorKind::NotARepository
    );
    assert_eq!(
        failure_kind(
            GitCommand::Log,
            128,
            "fatal: not a git repository (or any of the parent directories): .git\n"
        ),
        ErrorKind::NotARepository
    );
}

#[test]
fn test_remote_not_found_beats_not_a_repository() {
    let stderr = "fatal: 'nowhere' does not appear to be a git repository\n\
                  fatal: Could not read from remote repository.";
    assert_eq!(failure_kind(GitCommand::Fetch, 128, stderr), ErrorKind::RemoteNotFound);
    assert_eq!(
        failure_kind(GitCommand::Pull, 1, "fatal: couldn't find remote ref nope"),
        ErrorKind::RemoteNotFound
    );
}

#[test]
fn test_authentication_failed() {
    assert_eq!(
        failure_kind(
            GitCommand::Push,
            128,
            "remote: Invalid username or password.\nfatal: Authentication failed for 'https://x/'"
        ),
        ErrorKind::AuthenticationFailed
    );
    assert_eq!(
        failure_kind(GitCommand::Clone, 128, "git@host: Permission denied (publickey)."),
        ErrorKind::AuthenticationFailed
    );
}

#[test]
fn test_merge_conflict_reported_on_stdout() {
    let result = Classifier::new().classify(
        GitCommand::Merge,
        &outcome(
            1,
            "Auto-merging a.txt\nCONFLICT (content): Merge conflict in a.txt\nAutomatic merge failed; fix conflicts and then commit the result.\n",
            "",
        ),
    );
    let Outcome::Failure { kind, message } = result else {
        panic!("expected failure");
    };
    assert_eq!(kind, ErrorKind::MergeConflict);
    assert!(message.starts_with("Auto-merging a.txt"));
}

#[test]
fn test_unrecognized_failure_is_command_failed() {
    let result = Classifier::new().classify(
        GitCommand::Checkout,
        &outcome(1, "", "error: pathspec 'nope' did not match any file(s) known to git\n"),
    );
    assert_eq!(
        result,
        Outcome::Failure {
            kind: ErrorKind::CommandFailed,
            message: "error: pathspec 'nope' did not match any file(s) known to git".to_string(),
        }
    );
}

#[test]
fn test_nothing_to_commit_is_empty_success() {
    let result = Classifier::new().classify(
        GitCommand::Commit,
        &outcome(1, "On branch main\nnothing to commit, working tree clean\n", ""),
    );
    assert_eq!(result, Outcome::EmptySuccess);

    // Only the commit family treats the notice as success.
    let status = Classifier::new().classify(
        GitCommand::Status,
        &outcome(1, "nothing to commit", ""),
    );
    assert!(matches!(status, Outcome::Failure { .. }));
}

#[test]
fn test_extra_patterns_checked_first() {
    let extra = StderrPattern::new(ErrorKind::AuthenticationFailed, "(?i)not a git repository")
        .expect("pattern compiles");
    let classifier = Classifier::with_patterns([extra]);

    assert_eq!(classifier.patterns()[0].as_str(), "(?i)not a git repository");
    assert_eq!(
        classifier.failure_kind("fatal: not a git repository"),
        Some(ErrorKind::AuthenticationFailed)
    );
    assert_eq!(classifier.failure_kind(""), None);
}

#[test]
fn test_policy_table() {
    assert_eq!(CommandPolicy::for_command(GitCommand::Status), CommandPolicy::QUERY);
    assert_eq!(CommandPolicy::for_command(GitCommand::RevParse), CommandPolicy::STRICT);
    assert_eq!(CommandPolicy::for_command(GitCommand::Push), CommandPolicy::TRANSFER);
    assert_eq!(CommandPolicy::for_command(GitCommand::Commit), CommandPolicy::COMMIT);
    assert_eq!(CommandPolicy::for_command(GitCommand::Add), CommandPolicy::MUTATION);
    assert_eq!(CommandPolicy::TRANSFER.source(), OutputSource::Both);
    assert!(CommandPolicy::COMMIT.empty_is_valid());
    assert!(!CommandPolicy::STRICT.empty_is_valid());
}

#[test]
fn test_quiet_commit_is_empty_success() {
    let result = Classifier::new().classify(GitCommand::Commit, &outcome(0, "", ""));
    assert_eq!(result, Outcome::EmptySuccess);
}
