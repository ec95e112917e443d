// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use futures_util::future::BoxFuture;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::Barrier;

use super::{GitExecutor, Repository, RepositoryOptions, ShellExecutor};
use crate::command::{GitOptions, OptionMap};
use crate::core::process::ProcessOutcome;
use crate::error::{ErrorKind, ProcessError};
use crate::parse::LOG_FORMAT;

#[derive(Debug, Clone)]
struct Call {
    args: Vec<String>,
    cwd: PathBuf,
    started: Instant,
    finished: Instant,
}

#[derive(Debug, Default)]
struct FakeState {
    calls: Mutex<Vec<Call>>,
    outcomes: Mutex<VecDeque<ProcessOutcome>>,
}

/// Records every invocation and replays canned outcomes (success with no output by default).
#[derive(Debug, Clone, Default)]
struct FakeExecutor {
    state: Arc<FakeState>,
    delay: Duration,
    barrier: Option<Arc<Barrier>>,
}

impl FakeExecutor {
    fn respond(self, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.state
            .outcomes
            .lock()
            .expect("lock")
            .push_back(ProcessOutcome::new(exit_code, stdout, stderr, Duration::ZERO));
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.state.calls.lock().expect("lock").clone()
    }

    fn argv(&self) -> Vec<Vec<String>> {
        self.calls().into_iter().map(|c| c.args).collect()
    }
}

impl GitExecutor for FakeExecutor {
    fn execute(
        &self,
        args: Vec<String>,
        cwd: PathBuf,
    ) -> BoxFuture<'static, Result<ProcessOutcome, ProcessError>> {
        let state = Arc::clone(&self.state);
        let delay = self.delay;
        let barrier = self.barrier.clone();
        Box::pin(async move {
            let started = Instant::now();
            if let Some(barrier) = barrier {
                barrier.wait().await;
            }
            tokio::time::sleep(delay).await;
            let outcome = state
                .outcomes
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_default();
            state.calls.lock().expect("lock").push(Call {
                args,
                cwd,
                started,
                finished: Instant::now(),
            });
            Ok(outcome)
        })
    }
}

fn repo_with(fake: &FakeExecutor) -> Repository {
    let options = RepositoryOptions::builder()
        .with_executor(Arc::new(fake.clone()))
        .with_silent(true)
        .build();
    Repository::with_options("/work/repo", options).expect("repository")
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn test_argument_vectors() {
    let fake = FakeExecutor::default()
        .respond(0, "", "")
        .respond(0, "", "")
        .respond(0, "[main 1a2b3c4] first: commit\n", "");
    let repo = repo_with(&fake);

    let pending = vec![
        repo.status().map_ok_unit(),
        repo.add(["a.txt", "dir/b c.txt"]),
        repo.commit("first: commit", ["a.txt"], GitOptions::None).map_ok_unit(),
        repo.fetch(Some("origin"), Some("main"), ["--prune"]).map_ok_unit(),
        repo.pull(None, None, "--rebase").map_ok_unit(),
        repo.push(
            Some("origin"),
            None,
            OptionMap::new().with("set-upstream", true).with("force", false),
        ),
        repo.log("-n 2").map_ok_unit(),
        repo.branch_local().map_ok_unit(),
        repo.checkout_branch("dev", "origin/dev"),
        repo.add_remote("origin", "https://example.com/r.git"),
        repo.init(true),
        repo.diff_summary(["--cached"]).map_ok_unit(),
        repo.merge_from_to("a", "b", GitOptions::None).map_ok_unit(),
        repo.tags(GitOptions::None).map_ok_unit(),
        repo.add_annotated_tag("v1", "release one"),
        repo.clone("../origin", "copy", ["--depth", "1"]),
    ];
    for fut in pending {
        fut.await.expect("operation");
    }

    let log_format = format!("--pretty=format:{LOG_FORMAT}");
    assert_eq!(
        fake.argv(),
        vec![
            strings(&["status", "--porcelain=v2", "--branch", "--untracked-files=all"]),
            strings(&["add", "--", "a.txt", "dir/b c.txt"]),
            strings(&["commit", "-m", "first: commit", "--", "a.txt"]),
            strings(&["fetch", "--prune", "origin", "main"]),
            strings(&["pull", "--rebase"]),
            strings(&["push", "--set-upstream", "origin"]),
            strings(&["log", &log_format, "-n", "2"]),
            strings(&["branch", "-v", "--no-abbrev"]),
            strings(&["checkout", "-b", "dev", "origin/dev"]),
            strings(&["remote", "add", "origin", "https://example.com/r.git"]),
            strings(&["init", "--bare"]),
            strings(&["diff", "--stat=4096", "--cached"]),
            strings(&["merge", "a", "b"]),
            strings(&["tag", "-l"]),
            strings(&["tag", "-a", "-m", "release one", "v1"]),
            strings(&["clone", "--depth", "1", "--", "../origin", "copy"]),
        ]
    );
    assert!(fake.calls().iter().all(|c| c.cwd == PathBuf::from("/work/repo")));
}

/// Drops the value of a successful result so heterogeneous futures fit one Vec.
trait MapOkUnit {
    fn map_ok_unit(self) -> crate::queue::GitFuture<()>;
}

impl<T: Send + 'static> MapOkUnit for crate::queue::GitFuture<T> {
    fn map_ok_unit(self) -> crate::queue::GitFuture<()> {
        use futures_util::TryFutureExt;
        Box::pin(self.map_ok(|_| ()))
    }
}

#[tokio::test]
async fn test_same_handle_runs_in_call_order_without_overlap() {
    let fake = FakeExecutor::default().with_delay(Duration::from_millis(20));
    let repo = repo_with(&fake);

    let first = repo.status();
    let second = repo.log(GitOptions::None);
    let third = repo.tags(GitOptions::None);

    // Awaiting in reverse must not change execution order.
    third.await.expect("tags");
    second.await.expect("log");
    first.await.expect("status");

    let calls = fake.calls();
    let order: Vec<&str> = calls.iter().map(|c| c.args[0].as_str()).collect();
    assert_eq!(order, ["status", "log", "tag"]);
    for pair in calls.windows(2) {
        assert!(pair[0].finished <= pair[1].started, "operations overlapped");
    }
}

#[tokio::test]
async fn test_different_handles_run_concurrently() {
    // Each execution waits until both are in flight; serialized execution would hang.
    let barrier = Arc::new(Barrier::new(2));
    let fake_a = FakeExecutor::default().with_barrier(Arc::clone(&barrier));
    let fake_b = FakeExecutor::default().with_barrier(barrier);
    let repo_a = repo_with(&fake_a);
    let repo_b = repo_with(&fake_b);

    let both = futures_util::future::join(repo_a.status(), repo_b.status());
    let (a, b) = tokio::time::timeout(Duration::from_secs(5), both)
        .await
        .expect("handles must not block each other");
    a.expect("status a");
    b.expect("status b");
}

#[tokio::test]
async fn test_clean_status_is_empty_result() {
    let fake = FakeExecutor::default().respond(0, "", "");
    let repo = repo_with(&fake);

    let status = repo.status().await.expect("status");
    assert!(status.is_clean());
    assert_eq!((status.ahead, status.behind), (0, 0));
}

#[tokio::test]
async fn test_failure_carries_kind_and_stderr() {
    let fake = FakeExecutor::default().respond(
        128,
        "",
        "fatal: 'nowhere' does not appear to be a git repository\n",
    );
    let repo = repo_with(&fake);

    let err = repo
        .fetch(Some("nowhere"), None, GitOptions::None)
        .await
        .expect_err("fetch should fail");
    assert_eq!(err.kind(), ErrorKind::RemoteNotFound);
    assert_eq!(
        err.stderr(),
        Some("fatal: 'nowhere' does not appear to be a git repository")
    );
}

#[tokio::test]
async fn test_check_is_repo() {
    let fake = FakeExecutor::default()
        .respond(0, "true\n", "")
        .respond(128, "", "fatal: not a git repository (or any parent up to mount point /)")
        .respond(129, "", "error: unknown option");
    let repo = repo_with(&fake);

    assert!(repo.check_is_repo().await.expect("inside"));
    assert!(!repo.check_is_repo().await.expect("outside"));
    let err = repo.check_is_repo().await.expect_err("other failures propagate");
    assert_eq!(err.kind(), ErrorKind::CommandFailed);
}

#[tokio::test]
async fn test_nothing_to_commit_is_empty_commit() {
    let fake = FakeExecutor::default().respond(
        1,
        "On branch main\nnothing to commit, working tree clean\n",
        "",
    );
    let repo = repo_with(&fake);

    let commit = repo
        .commit("msg", Vec::<String>::new(), GitOptions::None)
        .await
        .expect("commit");
    assert!(commit.is_empty());
}

#[tokio::test]
async fn test_quiet_commit_succeeds() {
    let fake = FakeExecutor::default().respond(0, "", "");
    let repo = repo_with(&fake);

    let commit = repo
        .commit("msg", Vec::<String>::new(), "--quiet")
        .await
        .expect("commit");
    assert!(commit.is_empty());
    assert_eq!(fake.argv(), vec![strings(&["commit", "-m", "msg", "--quiet"])]);
}

#[tokio::test]
async fn test_unparseable_output_is_parse_error() {
    let fake = FakeExecutor::default().respond(0, "not a log record\n", "");
    let repo = repo_with(&fake);

    let err = repo.log(GitOptions::None).await.expect_err("parse failure");
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_add_tag_resolves_name() {
    let fake = FakeExecutor::default();
    let repo = repo_with(&fake);
    assert_eq!(repo.add_tag("v2").await.expect("tag"), "v2");
    assert_eq!(fake.argv(), vec![strings(&["tag", "v2"])]);
}

#[tokio::test]
async fn test_missing_binary_is_spawn_error() {
    let options = RepositoryOptions::builder()
        .with_executor(Arc::new(ShellExecutor::new("gitrun-no-such-git")))
        .build();
    let repo = Repository::with_options(".", options).expect("repository");

    let err = repo.status().await.expect_err("spawn failure");
    assert_eq!(err.kind(), ErrorKind::Spawn);
}

#[tokio::test]
async fn test_silent_toggle_and_options() {
    let repo = Repository::new("/work/repo").expect("repository");
    assert!(!repo.is_silent());
    let repo = repo.silent(true);
    assert!(repo.is_silent());
    assert_eq!(repo.path(), std::path::Path::new("/work/repo"));

    let options = RepositoryOptions::builder().with_capacity(4).build();
    assert_eq!(options.capacity(), Some(4));
    assert!(!options.silent());
}

#[tokio::test]
async fn test_shutdown_rejects_unstarted_operations() {
    let fake = FakeExecutor::default().with_delay(Duration::from_millis(50));
    let repo = repo_with(&fake);

    let running = repo.status();
    let queued = repo.log(GitOptions::None);
    // Let the first operation start before shutting down.
    tokio::time::sleep(Duration::from_millis(10)).await;
    repo.shutdown().await;

    running.await.expect("in-flight operation completes");
    assert_eq!(
        queued.await.expect_err("queued operation rejected").kind(),
        ErrorKind::QueueClosed
    );
    assert_eq!(fake.calls().len(), 1);
}
