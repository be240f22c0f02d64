//! Git Utility Functions
//!
//! Process plumbing shared by every git operation.

use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Output},
};

use crate::errors::{GitError, Result};

/// Runs `git <args>` inside `workdir` and waits for it to finish.
///
/// # Errors
/// * If the `git` executable cannot be spawned (e.g. it is not on `PATH`)
/// * If git exits with a non-zero status; the error carries its stderr
pub fn run_git<I, S>(workdir: &Path, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let command = describe(&args);

    tracing::debug!(%command, workdir = %workdir.display(), "running git");

    let output = Command::new("git")
        .args(&args)
        .current_dir(workdir)
        .output()
        .map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

    handle_output(command, output)
}

/// Turns a finished git process into `Ok(output)` or an error.
///
/// A process killed by a signal yields `Terminated`; any other failure yields
/// `CommandFailed`. Git writes some failures to stdout (`nothing to commit`),
/// so stdout is used when stderr is empty.
fn handle_output(command: String, output: Output) -> Result<Output> {
    if output.status.success() {
        tracing::debug!(%command, "git succeeded");
        return Ok(output);
    }

    if let Some(signal) = termination_signal(&output) {
        tracing::debug!(%command, signal, "git terminated by signal");
        return Err(GitError::Terminated { command, signal }.into());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let details = if stderr.is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr
    };
    let details = if details.is_empty() {
        format!("exited with {}", output.status)
    } else {
        details
    };

    tracing::debug!(%command, output = %details, "git failed");

    Err(GitError::CommandFailed {
        command,
        output: details,
    }
    .into())
}

#[cfg(unix)]
fn termination_signal(output: &Output) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    output.status.signal()
}

#[cfg(not(unix))]
const fn termination_signal(_output: &Output) -> Option<i32> {
    None
}

fn describe<S: AsRef<OsStr>>(args: &[S]) -> String {
    let mut command = String::from("git");

    for arg in args {
        command.push(' ');
        command.push_str(&arg.as_ref().to_string_lossy());
    }

    command
}
