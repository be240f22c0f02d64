use std::{io, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use inquire::{InquireError, Text};
use rand::rngs::ThreadRng;

use crate::{
    config::{ConfigStore, Settings},
    errors::{AutoCommitError, Result},
    git::SystemGit,
    interrupt::install_ctrl_c_handler,
    marker::MarkerNaming,
    orchestrator::{BatchOptions, BatchReport, Orchestrator, PushOutcome, PushTarget},
    utils::{print_banner, print_failure, print_info, print_success, print_warning},
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive run
    /// Ask how many commits to make, confirm, commit and push.
    #[command(short_flag = 'r')]
    Run {
        /// Number of commits; skips the count prompt
        #[arg(short = 'n', long = "count", value_name = "N")]
        count: Option<i64>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes", default_value_t = false)]
        yes: bool,
    },

    /// Non-interactive run
    /// Make a fixed number of commits (2 by default) and push them, to check
    /// that commits and remote credentials work.
    #[command(short_flag = 't')]
    Test,

    /// Write the default configuration file.
    Init {
        /// Overwrite an existing configuration file
        #[arg(short = 'f', long = "force", default_value_t = false)]
        force: bool,
    },

    /// Print shell completions.
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
#[command(about = "Create a batch of synthetic conventional commits and push them.")]
#[command(version)]
#[command(name = "auto-commit")]
pub struct Cli {
    /// Commands (defaults to the interactive `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose
    /// Print debug logs of every git invocation.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Remote to push to
    #[arg(long, global = true)]
    pub remote: Option<String>,

    /// Branch to push to
    #[arg(long, global = true)]
    pub branch: Option<String>,

    /// Marker file naming policy
    #[arg(long, global = true, value_enum)]
    pub naming: Option<MarkerNaming>,

    /// Create the commits without pushing them
    #[arg(long = "no-push", global = true, default_value_t = false)]
    pub no_push: bool,
}

/// Which entry point is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Interactive,
    SelfTest,
}

impl Cli {
    /// Batch options for `entry`, with command-line flags applied over `settings`.
    ///
    /// The self-test entry point writes one marker file per commit unless
    /// `--naming` says otherwise; the interactive one follows the settings.
    #[must_use]
    pub fn batch_options(
        &self,
        settings: &Settings,
        entry: EntryPoint,
        workdir: PathBuf,
    ) -> BatchOptions {
        let naming = self.naming.unwrap_or(match entry {
            EntryPoint::Interactive => settings.marker_naming,
            EntryPoint::SelfTest => MarkerNaming::Indexed,
        });

        let push = (settings.push && !self.no_push).then(|| PushTarget {
            remote: self.remote.clone().unwrap_or_else(|| settings.remote.clone()),
            branch: self.branch.clone().unwrap_or_else(|| settings.branch.clone()),
            url: settings.repository_url.clone(),
        });

        BatchOptions {
            workdir,
            naming,
            push,
            detail_probability: settings.detail_probability,
        }
    }

    fn config_store(&self) -> Result<ConfigStore> {
        match &self.config {
            Some(path) => Ok(ConfigStore::with_path(path)),
            None => ConfigStore::new(),
        }
    }
}

/// # `run`
/// Runs the parsed command line.
///
/// ## Errors
/// Returns an error if the command fails; the caller maps it to an exit code.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => run_interactive(cli, None, false),
        Some(Commands::Run { count, yes }) => run_interactive(cli, *count, *yes),
        Some(Commands::Test) => run_self_test(cli),
        Some(Commands::Init { force }) => {
            let store = cli.config_store()?;
            store.create_default(*force)?;
            print_success(
                "Configuration file created",
                &store.path().display().to_string(),
            );
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "auto-commit", &mut io::stdout());
            Ok(())
        }
    }
}

type LiveOrchestrator = Orchestrator<SystemGit, ThreadRng>;

fn build_orchestrator(cli: &Cli, settings: &Settings, entry: EntryPoint) -> Result<LiveOrchestrator> {
    let workdir = std::env::current_dir()?;
    let options = cli.batch_options(settings, entry, workdir.clone());

    Ok(Orchestrator::new(SystemGit::new(workdir), rand::rng(), options))
}

fn check_repository(orchestrator: &LiveOrchestrator) -> Result<()> {
    orchestrator.check_repository()?;
    print_success("Git repository detected", "");
    Ok(())
}

fn run_interactive(cli: &Cli, count: Option<i64>, yes: bool) -> Result<()> {
    print_banner("Auto Commit");

    let settings = cli.config_store()?.load()?;
    let orchestrator = build_orchestrator(cli, &settings, EntryPoint::Interactive)?;
    check_repository(&orchestrator)?;

    let count = match count {
        Some(count) => validate_commit_count(count)?,
        None => prompt_commit_count()?,
    };

    if !yes && !prompt_confirmation(count)? {
        return Err(AutoCommitError::UserCancelled);
    }

    let interrupt = install_ctrl_c_handler()?;
    let mut orchestrator = orchestrator.with_interrupt(interrupt);
    let report = orchestrator.run_batch(count)?;

    println!();
    print_success(&format!("Successfully made {count} commits!"), "");
    report_push(&orchestrator, &report, EntryPoint::Interactive);

    Ok(())
}

fn run_self_test(cli: &Cli) -> Result<()> {
    let settings = cli.config_store()?.load()?;
    let count = settings.test_commit_count;

    print_banner("Auto Commit Test");
    print_info(&format!("Testing with {count} commits..."), "");

    let orchestrator = build_orchestrator(cli, &settings, EntryPoint::SelfTest)?;
    check_repository(&orchestrator)?;

    let interrupt = install_ctrl_c_handler()?;
    let mut orchestrator = orchestrator.with_interrupt(interrupt);
    let report = orchestrator.run_batch(count)?;

    println!();
    print_success("Successfully made test commits!", "");
    report_push(&orchestrator, &report, EntryPoint::SelfTest);

    Ok(())
}

fn report_push(orchestrator: &LiveOrchestrator, report: &BatchReport, entry: EntryPoint) {
    let target = orchestrator.options().push.as_ref();
    let remote = target.map_or("origin", |t| t.remote.as_str());
    let branch = target.map_or("main", |t| t.branch.as_str());

    match &report.push {
        PushOutcome::Pushed => {
            print_success("Successfully pushed commits", &format!("{remote}/{branch}"));

            if let Some(url) = orchestrator.display_url() {
                print_info("View your commits at", &url);
            }

            if entry == EntryPoint::SelfTest {
                print_success("Auto-commit is working correctly with your remote credentials", "");
            }
        }
        PushOutcome::Failed(cause) => {
            print_failure("Error pushing commits", cause);
            print_warning(
                "Commits were created locally but not pushed",
                &format!(
                    "{} commit(s) are waiting in the local history",
                    report.commits.len()
                ),
            );

            match entry {
                EntryPoint::Interactive => print_info(
                    "You can push them later with",
                    &format!("git push {remote} {branch}"),
                ),
                EntryPoint::SelfTest => print_info(
                    "This usually indicates an authentication issue",
                    "check the credentials configured for the remote",
                ),
            }
        }
        PushOutcome::Skipped => print_info("Push skipped", "commits were created locally only"),
    }
}

/// # `parse_commit_count`
/// Parses the answer to the commit count prompt.
///
/// ## Errors
/// * `InvalidInput` if the answer is not an integer or is not positive
pub fn parse_commit_count(input: &str) -> Result<u32> {
    let count = input
        .trim()
        .parse::<i64>()
        .map_err(|_| AutoCommitError::InvalidInput("Please enter a valid number".to_string()))?;

    validate_commit_count(count)
}

/// # `validate_commit_count`
/// Accepts only positive counts that fit in a `u32`.
///
/// ## Errors
/// * `InvalidInput` if `count` is zero, negative or too large
pub fn validate_commit_count(count: i64) -> Result<u32> {
    if count <= 0 {
        return Err(AutoCommitError::InvalidInput(
            "Please enter a positive number".to_string(),
        ));
    }

    u32::try_from(count)
        .map_err(|_| AutoCommitError::InvalidInput(format!("Please enter at most {}", u32::MAX)))
}

/// # `is_confirmation`
/// Only a case-insensitive `y` or `yes` confirms; anything else cancels.
#[must_use]
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn prompt_commit_count() -> Result<u32> {
    loop {
        let answer = Text::new("How many commits do you want to make?")
            .prompt()
            .map_err(map_prompt_error)?;

        match parse_commit_count(&answer) {
            Ok(count) => return Ok(count),
            Err(AutoCommitError::InvalidInput(reason)) => print_warning(&reason, ""),
            Err(error) => return Err(error),
        }
    }
}

fn prompt_confirmation(count: u32) -> Result<bool> {
    let answer = Text::new(&format!(
        "Are you sure you want to make {count} commits? (y/N)"
    ))
    .prompt()
    .map_err(map_prompt_error)?;

    Ok(is_confirmation(&answer))
}

/// Ctrl-C and Esc at a prompt are a cancellation, not a failure.
fn map_prompt_error(error: InquireError) -> AutoCommitError {
    match error {
        InquireError::OperationInterrupted | InquireError::OperationCanceled => {
            AutoCommitError::UserCancelled
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commit_count_accepts_positive_numbers() {
        assert_eq!(parse_commit_count("3").unwrap(), 3);
        assert_eq!(parse_commit_count("  12 \n").unwrap(), 12);
    }

    #[test]
    fn test_parse_commit_count_rejects_invalid_input() {
        for input in ["", "abc", "2.5", "0", "-4", "99999999999"] {
            assert!(
                matches!(
                    parse_commit_count(input),
                    Err(AutoCommitError::InvalidInput(_))
                ),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_confirmation_answers() {
        for answer in ["y", "Y", "yes", "YES", " Yes "] {
            assert!(is_confirmation(answer), "{answer:?} should confirm");
        }

        for answer in ["", "n", "no", "yep", "sure", "y e s"] {
            assert!(!is_confirmation(answer), "{answer:?} should cancel");
        }
    }

    #[test]
    fn test_prompt_interrupt_is_cancellation() {
        assert!(matches!(
            map_prompt_error(InquireError::OperationInterrupted),
            AutoCommitError::UserCancelled
        ));
        assert!(matches!(
            map_prompt_error(InquireError::NotTTY),
            AutoCommitError::Prompt(_)
        ));
    }

    #[test]
    fn test_self_test_defaults_to_indexed_markers() {
        let cli = Cli::parse_from(["auto-commit", "test"]);
        let options = cli.batch_options(&Settings::default(), EntryPoint::SelfTest, PathBuf::from("."));

        assert_eq!(options.naming, MarkerNaming::Indexed);
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "auto-commit",
            "run",
            "--remote",
            "upstream",
            "--branch",
            "trunk",
            "--naming",
            "indexed",
        ]);
        let options =
            cli.batch_options(&Settings::default(), EntryPoint::Interactive, PathBuf::from("."));

        assert_eq!(options.naming, MarkerNaming::Indexed);
        let target = options.push.unwrap();
        assert_eq!(target.remote, "upstream");
        assert_eq!(target.branch, "trunk");
    }

    #[test]
    fn test_no_push_flag_disables_push() {
        let cli = Cli::parse_from(["auto-commit", "--no-push"]);
        let options =
            cli.batch_options(&Settings::default(), EntryPoint::Interactive, PathBuf::from("."));

        assert!(cli.command.is_none());
        assert_eq!(options.naming, MarkerNaming::Single);
        assert!(options.push.is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
