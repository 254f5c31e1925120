//! Optional `tictactoe.toml` settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings read from the configuration file.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Seed for every random source; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games in a series unless `--games` is given.
    #[serde(default = "default_series_games")]
    series_games: u32,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_series_games() -> u32 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            seed: None,
            series_games: default_series_games(),
        }
    }
}

impl AppConfig {
    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Reads and validates a `tictactoe.toml` file.
    ///
    /// Unknown keys are refused so that a misspelt `series_games` is not
    /// silently replaced by its default.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, ConfigProblem::Unreadable(e.to_string())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(path, ConfigProblem::Malformed(e.message().to_string())))?;

        if config.series_games == 0 {
            return Err(ConfigError::new(path, ConfigProblem::NoGames));
        }

        info!(?config.seed, config.series_games, log_filter = %config.log_filter, "Settings loaded");
        Ok(config)
    }

    /// Replaces the configured seed when `seed` is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// What is wrong with a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigProblem {
    /// The file exists but could not be read.
    #[display("cannot be read: {_0}")]
    Unreadable(String),

    /// The TOML is invalid or holds an unknown key or a mistyped value.
    #[display("is not a valid settings file ({_0}); the keys are log_filter, seed and series_games")]
    Malformed(String),

    /// `series_games` is zero.
    #[display("sets series_games to 0, but a series needs at least one game")]
    NoGames,
}

/// A configuration file that cannot be used, with the place it was rejected.
#[derive(Debug, Clone, Display, Error)]
#[display("{} {problem} (rejected at {file}:{line})", path.display())]
pub struct ConfigError {
    /// File that was rejected.
    pub path: PathBuf,
    /// Why it was rejected.
    pub problem: ConfigProblem,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error for `path`, recording the caller's location.
    #[track_caller]
    pub fn new(path: &Path, problem: ConfigProblem) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.to_path_buf(),
            problem,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
