//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::{path::Path, process::Command};

use tempfile::TempDir;

/// Run git in `dir`, panicking on failure, and return trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {args:?}: {e}"));

    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A throwaway repository on branch `main` with one initial commit.
pub struct TestRepo {
    pub dir: TempDir,
    remote: Option<TempDir>,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        git(path, &["init", "--quiet"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(path, &["config", "user.name", "Test User"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "commit.gpgsign", "false"]);

        std::fs::write(path.join("README.md"), "# test\n").expect("Failed to write README");
        git(path, &["add", "README.md"]);
        git(path, &["commit", "--quiet", "-m", "chore: initial commit"]);

        Self { dir, remote: None }
    }

    /// Same repository with a bare repository registered as `origin`.
    pub fn with_remote() -> Self {
        let mut repo = Self::new();
        let remote = tempfile::tempdir().expect("Failed to create remote dir");

        git(remote.path(), &["init", "--bare", "--quiet"]);
        git(
            repo.path(),
            &["remote", "add", "origin", remote.path().to_str().expect("Invalid remote path")],
        );

        repo.remote = Some(remote);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn commit_count(&self) -> usize {
        git(self.path(), &["rev-list", "--count", "HEAD"])
            .parse()
            .expect("Invalid commit count")
    }

    /// Commit subjects, newest first.
    pub fn subjects(&self) -> Vec<String> {
        git(self.path(), &["log", "--format=%s"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Commits on the remote's `main`, or 0 when it has none.
    pub fn remote_commit_count(&self) -> usize {
        let remote = self.remote.as_ref().expect("Repository has no remote");
        let output = Command::new("git")
            .args(["rev-list", "--count", "main"])
            .current_dir(remote.path())
            .output()
            .expect("Failed to run git rev-list");

        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .unwrap_or(0)
    }

    /// Files in the working tree, excluding `.git`.
    pub fn files(&self) -> Vec<String> {
        let mut files: Vec<String> = std::fs::read_dir(self.path())
            .expect("Failed to read repo dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != ".git")
            .collect();
        files.sort();
        files
    }
}
