//! Front end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the move list beside the board.
    #[serde(default = "default_show_move_list")]
    show_move_list: bool,

    /// File that receives log output while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_move_list() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel.log")
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_move_list: default_show_move_list(),
            log_file: default_log_file(),
        }
    }
}

impl FrontendConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(show_move_list = config.show_move_list, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, log_filter: Option<String>, hide_move_list: bool) -> Self {
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        if hide_move_list {
            self.show_move_list = false;
        }
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
