//! Configuration Management Module
//!
//! Settings are layered, lowest to highest precedence:
//! - built-in defaults
//! - the TOML file at `~/.config/auto-commit/config.toml` (or `--config`)
//! - environment variables prefixed with `AUTOCOMMIT_` (e.g. `AUTOCOMMIT_BRANCH`)
//!
//! Command-line flags are applied on top by the CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConfigError, Result},
    marker::MarkerNaming,
    message::DEFAULT_DETAIL_PROBABILITY,
};

pub const CONFIG_FOLDER_NAME: &str = "auto-commit";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ENV_PREFIX: &str = "AUTOCOMMIT";

/// Runtime settings for a commit batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Remote pushed to after a successful batch.
    pub remote: String,
    /// Branch pushed to after a successful batch.
    pub branch: String,
    /// Shown after a successful push; falls back to the remote's URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    /// Marker naming for the interactive entry point.
    pub marker_naming: MarkerNaming,
    /// Number of commits made by the non-interactive `test` entry point.
    pub test_commit_count: u32,
    /// Chance that a generated message carries a detail paragraph.
    pub detail_probability: f64,
    /// Whether to push once all commits are created.
    pub push: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            repository_url: None,
            marker_naming: MarkerNaming::Single,
            test_commit_count: 2,
            detail_probability: DEFAULT_DETAIL_PROBABILITY,
            push: true,
        }
    }
}

impl Settings {
    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    /// * If `remote` or `branch` is empty
    /// * If `test_commit_count` is zero
    /// * If `detail_probability` is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(invalid("remote", "must not be empty"));
        }

        if self.branch.trim().is_empty() {
            return Err(invalid("branch", "must not be empty"));
        }

        if self.test_commit_count == 0 {
            return Err(invalid("test_commit_count", "must be a positive integer"));
        }

        if !(0.0..=1.0).contains(&self.detail_probability) {
            return Err(invalid(
                "detail_probability",
                format!("{} is not within 0.0..=1.0", self.detail_probability),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::errors::AutoCommitError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}

/// Location of the configuration file and the operations on it.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    required: bool,
}

impl ConfigStore {
    /// Creates a store pointing at the default configuration file.
    ///
    /// # Errors
    /// * When the user's configuration directory cannot be determined
    pub fn new() -> Result<Self> {
        let root = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self::optional(
            root.join(CONFIG_FOLDER_NAME).join(CONFIG_FILE_NAME),
        ))
    }

    /// Creates a store for an explicit file path, which must exist when loading.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// Creates a store whose file may be absent; defaults apply in that case.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the layered settings. The file is always parsed as TOML, whatever
    /// its extension.
    ///
    /// # Errors
    /// * If the file is missing and the store was created with [`Self::with_path`]
    /// * If the file or an environment variable cannot be parsed
    /// * If the resulting settings are out of range
    pub fn load(&self) -> Result<Settings> {
        let settings: Settings = config::Config::builder()
            .add_source(
                config::File::from(self.path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(self.required),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(ConfigError::from)?
            .try_deserialize()
            .map_err(ConfigError::from)?;

        settings.validate()?;
        tracing::debug!(path = %self.path.display(), ?settings, "configuration loaded");

        Ok(settings)
    }

    /// Writes the default settings to the configuration file.
    ///
    /// # Errors
    /// * If the file already exists and `force` is false
    /// * If the file or its folder cannot be written
    pub fn create_default(&self, force: bool) -> Result<()> {
        if self.path.exists() && !force {
            return Err(ConfigError::ConfigAlreadyExists {
                path: self.path.display().to_string(),
            }
            .into());
        }

        if let Some(folder) = self.path.parent() {
            fs::create_dir_all(folder).map_err(ConfigError::from)?;
        }

        let content = toml::to_string_pretty(&Settings::default()).map_err(ConfigError::from)?;
        fs::write(&self.path, content).map_err(ConfigError::from)?;

        Ok(())
    }
}
