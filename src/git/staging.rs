//! Git Staging Operations

use std::{ffi::OsStr, path::Path};

use crate::errors::Result;

use super::utils::run_git;

/// Stages `path` (relative to `workdir`) with `git add`.
///
/// # Errors
/// * If git cannot be spawned or `git add` exits non-zero
pub fn git_add(workdir: &Path, path: &Path) -> Result<()> {
    run_git(workdir, [OsStr::new("add"), path.as_os_str()]).map(|_| ())
}
