//! Marker Files
//!
//! Trivial text files written only to give git a change to commit.
//! Every file a run creates is tracked and removed again by
//! [`MarkerFiles::cleanup`], which also runs when the set is dropped.
//! Files that existed before the run are overwritten but never removed.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::utils::{print_success, print_warning};

/// Timestamp format embedded in marker file contents.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File reused by the [`MarkerNaming::Single`] policy.
pub const SINGLE_MARKER_FILE: &str = "temp_commit.txt";

/// How marker files are named across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkerNaming {
    /// One file, overwritten on every iteration.
    #[default]
    Single,
    /// One file per iteration: `test_commit_<n>.txt`.
    Indexed,
}

impl MarkerNaming {
    /// File name used for the given 1-based iteration.
    #[must_use]
    pub fn file_name(self, index: u32) -> String {
        match self {
            Self::Single => SINGLE_MARKER_FILE.to_string(),
            Self::Indexed => format!("test_commit_{index}.txt"),
        }
    }

    /// Marker content for the given iteration and timestamp.
    #[must_use]
    pub fn content(self, index: u32, timestamp: &str) -> String {
        match self {
            Self::Single => format!("Development update {index} - {timestamp}\n"),
            Self::Indexed => format!("Test commit {index} - {timestamp}\n"),
        }
    }
}

/// Failure to remove one marker file.
#[derive(Debug)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Marker files created by the current run.
#[derive(Debug)]
pub struct MarkerFiles {
    dir: PathBuf,
    naming: MarkerNaming,
    created: Vec<PathBuf>,
}

impl MarkerFiles {
    pub fn new(dir: impl Into<PathBuf>, naming: MarkerNaming) -> Self {
        Self {
            dir: dir.into(),
            naming,
            created: Vec::new(),
        }
    }

    /// Files created so far and not yet cleaned up.
    #[must_use]
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    /// Writes the marker for iteration `index`, stamped with the current local time.
    ///
    /// Returns the file name relative to the marker directory.
    ///
    /// # Errors
    /// * If the file cannot be written
    pub fn write(&mut self, index: u32) -> io::Result<PathBuf> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let name = PathBuf::from(self.naming.file_name(index));
        let path = self.dir.join(&name);
        let tracked = self.created.contains(&path);
        let preexisting = !tracked && path.exists();

        fs::write(&path, self.naming.content(index, &timestamp))?;

        if preexisting {
            tracing::debug!(path = %path.display(), "marker file existed before the run, keeping it");
        } else if !tracked {
            self.created.push(path);
        }

        Ok(name)
    }

    /// Removes every tracked marker file. Safe to call more than once.
    ///
    /// Files that are already gone count as removed; other failures are
    /// reported as warnings and returned, never raised.
    pub fn cleanup(&mut self) -> Vec<CleanupFailure> {
        let mut failures = Vec::new();

        for path in self.created.drain(..) {
            match remove_if_present(&path) {
                Ok(true) => print_success("Cleaned up", &display_name(&path)),
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "could not remove marker file");
                    print_warning(
                        "Could not clean up marker file",
                        &format!("{}: {error}", display_name(&path)),
                    );
                    failures.push(CleanupFailure { path, error });
                }
            }
        }

        failures
    }
}

impl Drop for MarkerFiles {
    fn drop(&mut self) {
        if !self.created.is_empty() {
            let _ = self.cleanup();
        }
    }
}

fn remove_if_present(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
