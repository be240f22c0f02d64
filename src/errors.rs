use thiserror::Error;

/// Main error type for the auto-commit application
#[derive(Error, Debug)]
pub enum AutoCommitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Not in a git repository or git is not available")]
    NotARepository,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Commit {index}/{requested} failed: {reason}")]
    CommitFailed {
        index: u32,
        requested: u32,
        completed: usize,
        reason: String,
    },

    #[error("Interrupted after {completed} commit(s)")]
    Interrupted { completed: usize },
}

impl AutoCommitError {
    /// Process exit status for this error.
    ///
    /// Cancellation by the user is a clean exit; everything else is a failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UserCancelled | Self::Interrupted { .. } => 0,
            _ => 1,
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error while accessing config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file already exists at {path} - use --force to overwrite")]
    ConfigAlreadyExists { path: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Could not determine the configuration directory - please set HOME")]
    ConfigDirNotFound,
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },

    #[error("`{command}` was terminated by signal {signal}")]
    Terminated { command: String, signal: i32 },
}

/// Type alias for Result using `AutoCommitError`
pub type Result<T> = std::result::Result<T, AutoCommitError>;
