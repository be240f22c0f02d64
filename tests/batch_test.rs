mod common;

use auto_commit::{
    errors::AutoCommitError,
    git::SystemGit,
    marker::MarkerNaming,
    orchestrator::{BatchOptions, Orchestrator, PushOutcome, PushTarget},
};
use rand::{SeedableRng, rngs::StdRng};
use regex::Regex;

use common::TestRepo;

fn options(repo: &TestRepo, naming: MarkerNaming, push: bool) -> BatchOptions {
    BatchOptions {
        naming,
        push: push.then(|| PushTarget {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            url: None,
        }),
        ..BatchOptions::new(repo.path())
    }
}

fn orchestrator(repo: &TestRepo, naming: MarkerNaming, push: bool) -> Orchestrator<SystemGit, StdRng> {
    Orchestrator::new(
        SystemGit::new(repo.path()),
        StdRng::seed_from_u64(2024),
        options(repo, naming, push),
    )
}

#[test]
fn test_batch_creates_and_pushes_commits() {
    let repo = TestRepo::with_remote();
    let mut orchestrator = orchestrator(&repo, MarkerNaming::Single, true);

    orchestrator.check_repository().unwrap();
    let report = orchestrator.run_batch(3).unwrap();

    assert_eq!(report.commits.len(), 3);
    assert_eq!(report.push, PushOutcome::Pushed);
    assert_eq!(repo.commit_count(), 4);
    assert_eq!(repo.remote_commit_count(), 4);
}

#[test]
fn test_recorded_subjects_are_conventional() {
    let repo = TestRepo::new();
    let report = orchestrator(&repo, MarkerNaming::Single, false)
        .run_batch(5)
        .unwrap();

    let pattern =
        Regex::new(r"^(feat|fix|docs|style|refactor|perf|test|chore|build|ci): .+").unwrap();
    let subjects = repo.subjects();

    for subject in &subjects[..5] {
        assert!(pattern.is_match(subject), "bad subject: {subject}");
    }

    // Newest first in the log, oldest first in the report
    let first_lines: Vec<String> = report
        .commits
        .iter()
        .rev()
        .map(|c| c.message.lines().next().unwrap().to_string())
        .collect();
    assert_eq!(first_lines, subjects[..5].to_vec());
}

#[test]
fn test_single_naming_leaves_no_marker_behind() {
    let repo = TestRepo::new();
    orchestrator(&repo, MarkerNaming::Single, false)
        .run_batch(2)
        .unwrap();

    assert_eq!(repo.files(), vec!["README.md".to_string()]);
}

#[test]
fn test_indexed_naming_commits_one_file_each_and_cleans_up() {
    let repo = TestRepo::new();
    orchestrator(&repo, MarkerNaming::Indexed, false)
        .run_batch(3)
        .unwrap();

    let tracked = common::git(repo.path(), &["ls-files"]);
    for index in 1..=3 {
        assert!(tracked.contains(&format!("test_commit_{index}.txt")));
    }
    assert_eq!(repo.files(), vec!["README.md".to_string()]);
}

#[test]
fn test_push_failure_keeps_local_commits() {
    // No origin configured, so the push is rejected.
    let repo = TestRepo::new();
    let report = orchestrator(&repo, MarkerNaming::Single, true)
        .run_batch(2)
        .unwrap();

    assert_eq!(report.commits.len(), 2);
    assert!(report.is_committed_but_not_pushed());
    assert_eq!(repo.commit_count(), 3);
    assert_eq!(repo.files(), vec!["README.md".to_string()]);
}

#[test]
fn test_not_a_repository() {
    let dir = tempfile::tempdir().unwrap();
    let orchestrator = Orchestrator::new(
        SystemGit::new(dir.path()),
        StdRng::seed_from_u64(1),
        BatchOptions::new(dir.path()),
    );

    assert!(matches!(
        orchestrator.check_repository(),
        Err(AutoCommitError::NotARepository)
    ));
}

#[test]
fn test_display_url_reads_remote() {
    let repo = TestRepo::new();
    common::git(
        repo.path(),
        &["remote", "add", "origin", "https://example.com/team/repo.git"],
    );

    let orchestrator = orchestrator(&repo, MarkerNaming::Single, true);
    assert_eq!(
        orchestrator.display_url().as_deref(),
        Some("https://example.com/team/repo.git")
    );
}
