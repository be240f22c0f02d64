//! Commit Orchestration
//!
//! Drives one batch: write a marker file, stage it, commit it with a generated
//! message, repeat; then push once if every commit succeeded. The first failing
//! step ends the batch. Commits that were already created are kept, and the
//! marker files are removed however the batch ends.

use std::path::PathBuf;

use rand::Rng;

use crate::{
    errors::{AutoCommitError, GitError, Result},
    git::GitRunner,
    interrupt::InterruptFlag,
    marker::{MarkerFiles, MarkerNaming},
    message::{CommitMessage, DEFAULT_DETAIL_PROBABILITY, MessageGenerator},
    utils::{print_failure, print_info, print_success},
};

/// Where a finished batch is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    pub remote: String,
    pub branch: String,
    /// Shown to the user after a successful push.
    pub url: Option<String>,
}

/// Parameters shared by both entry points.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub workdir: PathBuf,
    pub naming: MarkerNaming,
    /// `None` skips the push step.
    pub push: Option<PushTarget>,
    pub detail_probability: f64,
}

impl BatchOptions {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            naming: MarkerNaming::default(),
            push: None,
            detail_probability: DEFAULT_DETAIL_PROBABILITY,
        }
    }
}

/// One commit created by the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// 1-based position in the batch.
    pub index: u32,
    /// Full message, including any detail paragraph.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// Commits exist locally but were not pushed.
    Failed(String),
    Skipped,
}

/// Result of a batch in which every commit was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub commits: Vec<CommitRecord>,
    pub push: PushOutcome,
}

impl BatchReport {
    /// Committed but not pushed: a warning, not a failure.
    #[must_use]
    pub fn is_committed_but_not_pushed(&self) -> bool {
        matches!(self.push, PushOutcome::Failed(_))
    }
}

pub struct Orchestrator<G, R> {
    git: G,
    rng: R,
    generator: MessageGenerator,
    options: BatchOptions,
    interrupt: InterruptFlag,
}

impl<G: GitRunner, R: Rng> Orchestrator<G, R> {
    pub fn new(git: G, rng: R, options: BatchOptions) -> Self {
        Self {
            git,
            rng,
            generator: MessageGenerator::with_detail_probability(options.detail_probability),
            options,
            interrupt: InterruptFlag::new(),
        }
    }

    /// Replaces the interrupt flag checked between iterations.
    #[must_use]
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Verifies that the working directory is a git working tree.
    ///
    /// # Errors
    /// * `NotARepository` if `git status` fails or git is unavailable
    pub fn check_repository(&self) -> Result<()> {
        self.git.status().map_err(|error| {
            tracing::debug!(%error, "repository check failed");
            AutoCommitError::NotARepository
        })
    }

    /// Creates `count` commits, then pushes them if a push target is set.
    ///
    /// A failed push does not fail the batch; it is recorded in the report.
    ///
    /// # Errors
    /// * `InvalidInput` if `count` is zero
    /// * `CommitFailed` at the first marker write, stage or commit failure;
    ///   the remaining iterations are not attempted
    /// * `Interrupted` if the interrupt flag was raised during the batch
    pub fn run_batch(&mut self, count: u32) -> Result<BatchReport> {
        if count == 0 {
            return Err(AutoCommitError::InvalidInput(
                "commit count must be a positive integer".to_string(),
            ));
        }

        tracing::info!(count, naming = ?self.options.naming, "starting commit batch");
        print_info(&format!("Making {count} commits..."), "");

        let mut markers = MarkerFiles::new(&self.options.workdir, self.options.naming);
        let mut commits = Vec::new();

        for index in 1..=count {
            if self.interrupt.is_raised() {
                return Err(AutoCommitError::Interrupted {
                    completed: commits.len(),
                });
            }

            match self.commit_once(&mut markers, index) {
                Ok(message) => {
                    print_success(
                        &format!("Made commit {index}/{count}"),
                        &message.summary_line(),
                    );
                    commits.push(CommitRecord {
                        index,
                        message: message.to_string(),
                    });
                }
                // Git children receive the same SIGINT and may die before the flag is raised.
                Err(AutoCommitError::Git(GitError::Terminated { .. })) => {
                    self.interrupt.raise();
                    return Err(AutoCommitError::Interrupted {
                        completed: commits.len(),
                    });
                }
                Err(_) if self.interrupt.is_raised() => {
                    return Err(AutoCommitError::Interrupted {
                        completed: commits.len(),
                    });
                }
                Err(error) => {
                    tracing::warn!(index, %error, "commit step failed");
                    print_failure(&format!("Error making commit {index}"), &error.to_string());

                    return Err(AutoCommitError::CommitFailed {
                        index,
                        requested: count,
                        completed: commits.len(),
                        reason: error.to_string(),
                    });
                }
            }
        }

        if self.interrupt.is_raised() {
            return Err(AutoCommitError::Interrupted {
                completed: commits.len(),
            });
        }

        tracing::info!(count, "all commits created");
        let push = self.push_batch();
        markers.cleanup();

        Ok(BatchReport { commits, push })
    }

    /// URL to show after a push: the configured one, else the remote's own.
    #[must_use]
    pub fn display_url(&self) -> Option<String> {
        let target = self.options.push.as_ref()?;

        target
            .url
            .clone()
            .or_else(|| self.git.remote_url(&target.remote).ok())
    }

    fn commit_once(&mut self, markers: &mut MarkerFiles, index: u32) -> Result<CommitMessage> {
        let marker = markers.write(index)?;
        self.git.add(&marker)?;

        let message = self.generator.generate(&mut self.rng);
        self.git.commit(&message.to_string())?;

        Ok(message)
    }

    fn push_batch(&self) -> PushOutcome {
        let Some(target) = &self.options.push else {
            tracing::debug!("push disabled");
            return PushOutcome::Skipped;
        };

        print_info(
            "Pushing commits",
            &format!("git push {} {}", target.remote, target.branch),
        );

        match self.git.push(&target.remote, &target.branch) {
            Ok(()) => PushOutcome::Pushed,
            Err(error) => {
                tracing::warn!(%error, remote = %target.remote, branch = %target.branch, "push failed");
                PushOutcome::Failed(error.to_string())
            }
        }
    }
}
