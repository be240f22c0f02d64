//! Git Operations Module
//!
//! Every operation shells out to the system `git` binary, inheriting the
//! user's git config, hooks and credential helpers. [`GitRunner`] is the seam
//! the orchestrator talks to; [`SystemGit`] is the real implementation.

pub mod commit;
pub mod remote;
pub mod repository;
pub mod staging;
pub mod utils;

use std::path::{Path, PathBuf};

use crate::errors::Result;

/// The git invocations a commit batch needs.
///
/// Each call is synchronous and attempted exactly once; a non-zero exit
/// status is reported as an error.
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    /// `git status`
    fn status(&self) -> Result<()>;

    /// `git add <path>`
    fn add(&self, path: &Path) -> Result<()>;

    /// `git commit -m <message>`
    fn commit(&self, message: &str) -> Result<()>;

    /// `git push <remote> <branch>`
    fn push(&self, remote: &str, branch: &str) -> Result<()>;

    /// `git remote get-url <remote>`
    fn remote_url(&self, remote: &str) -> Result<String>;
}

/// [`GitRunner`] backed by the `git` executable, run inside `workdir`.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl GitRunner for SystemGit {
    fn status(&self) -> Result<()> {
        repository::git_status(&self.workdir)
    }

    fn add(&self, path: &Path) -> Result<()> {
        staging::git_add(&self.workdir, path)
    }

    fn commit(&self, message: &str) -> Result<()> {
        commit::git_commit(&self.workdir, message)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        remote::git_push(&self.workdir, remote, branch)
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        remote::get_remote_url(&self.workdir, remote)
    }
}
