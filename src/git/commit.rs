//! Commit Operations

use std::path::Path;

use crate::errors::Result;

use super::utils::run_git;

/// Creates a commit from the staged changes with `git commit -m <message>`.
///
/// Commits are not signed explicitly; `commit.gpgsign` in the user's git
/// config still applies.
///
/// # Errors
/// * If git cannot be spawned
/// * If the commit fails (nothing staged, missing identity, rejecting hook, ...)
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use auto_commit::git::commit::git_commit;
///
/// git_commit(Path::new("."), "docs: Update documentation")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn git_commit(workdir: &Path, message: &str) -> Result<()> {
    run_git(workdir, ["commit", "-m", message]).map(|_| ())
}
