//! Git Remote Operations

use std::path::Path;

use crate::errors::Result;

use super::utils::run_git;

/// Pushes `branch` to `remote` with `git push <remote> <branch>`.
///
/// Authentication is left to git's own credential helpers. No timeout is
/// applied, so a hanging remote blocks the caller.
///
/// # Errors
/// * If git cannot be spawned
/// * If the push is rejected or the remote is unreachable
pub fn git_push(workdir: &Path, remote: &str, branch: &str) -> Result<()> {
    run_git(workdir, ["push", remote, branch]).map(|_| ())
}

/// Returns the fetch URL of `remote`.
///
/// # Errors
/// * If git cannot be spawned or the remote does not exist
pub fn get_remote_url(workdir: &Path, remote: &str) -> Result<String> {
    let output = run_git(workdir, ["remote", "get-url", remote])?;

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
