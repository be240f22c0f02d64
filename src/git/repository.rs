//! Repository Operations
//!
//! Detection of the working tree the batch runs in.

use std::path::Path;

use crate::errors::Result;

use super::utils::run_git;

/// Runs `git status` in `workdir`.
///
/// Succeeds only inside a git working tree with `git` available on `PATH`.
///
/// # Errors
/// * If git cannot be spawned or `git status` exits non-zero
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use auto_commit::git::repository::git_status;
///
/// if git_status(Path::new(".")).is_ok() {
///     println!("Git repository detected");
/// }
/// ```
pub fn git_status(workdir: &Path) -> Result<()> {
    run_git(workdir, ["status"]).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_status_fails_outside_repository() {
        let temp_dir = TempDir::new().unwrap();

        assert!(git_status(temp_dir.path()).is_err());
    }

    #[test]
    fn test_status_succeeds_in_new_repository() {
        let temp_dir = TempDir::new().unwrap();
        run_git(temp_dir.path(), ["init", "--quiet"]).unwrap();

        assert!(git_status(temp_dir.path()).is_ok());
    }
}
