//! Application settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings read from a TOML file; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// SQLite database holding names and scores.
    #[serde(default = "default_db_path")]
    db_path: PathBuf,

    /// Seconds of inactivity before a hint is offered.
    #[serde(default = "default_hint_after_secs")]
    hint_after_secs: u64,

    /// Whether inactivity hints are offered at all.
    #[serde(default = "default_hints_enabled")]
    hints_enabled: bool,
}

#[instrument]
fn default_db_path() -> PathBuf {
    PathBuf::from("noughts_and_crosses.db")
}

#[instrument]
fn default_hint_after_secs() -> u64 {
    10
}

#[instrument]
fn default_hints_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            hint_after_secs: default_hint_after_secs(),
            hints_enabled: default_hints_enabled(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(db_path = %settings.db_path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the database path.
    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = db_path;
        self
    }

    /// Overrides the hint threshold.
    pub fn with_hint_after_secs(mut self, secs: u64) -> Self {
        self.hint_after_secs = secs;
        self
    }

    /// Turns hints off.
    pub fn without_hints(mut self) -> Self {
        self.hints_enabled = false;
        self
    }

    /// Hint threshold as a duration.
    pub fn hint_after(&self) -> Duration {
        Duration::from_secs(self.hint_after_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
