use clap::Parser;
use tracing_subscriber::EnvFilter;

use auto_commit::{
    cli::{Cli, run},
    errors::AutoCommitError,
    utils::{print_error, print_info},
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(&cli) {
        report_error(&error);
        std::process::exit(error.exit_code());
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(error: &AutoCommitError) {
    match error {
        AutoCommitError::UserCancelled => print_info("Operation cancelled", ""),
        AutoCommitError::Interrupted { completed } => print_info(
            "Operation cancelled by user",
            &format!("{completed} commit(s) were created before the interrupt"),
        ),
        AutoCommitError::NotARepository => print_error(
            "Git repository not found",
            "Not in a git repository or git is not available",
            "Please run auto-commit from within a git repository.",
        ),
        AutoCommitError::CommitFailed {
            index,
            requested,
            completed,
            reason,
        } => print_error(
            "Some commits failed",
            &format!("{completed} of {requested} commits were created before commit {index} failed"),
            reason,
        ),
        other => print_error("Unexpected error", &other.to_string(), ""),
    }
}
