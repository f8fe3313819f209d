//! Application configuration loaded from TOML.

use crate::geometry::BoardGeometry;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Runtime settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Width of one board square in terminal columns.
    square_width: u16,

    /// Height of one board square in terminal rows.
    square_height: u16,

    /// Thickness of the lines between squares.
    line_size: u16,

    /// File that receives log output.
    log_file: PathBuf,

    /// Seed for the computer opponent. Random when absent.
    seed: Option<u64>,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("mousetoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        let geometry = BoardGeometry::TERMINAL;
        Self {
            square_width: geometry.square_width(),
            square_height: geometry.square_height(),
            line_size: geometry.line_size(),
            log_file: default_log_file(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Board layout described by this configuration.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.square_width, self.square_height, self.line_size)
    }

    /// Replaces the opponent seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Replaces the log file path.
    pub fn set_log_file(&mut self, path: PathBuf) {
        self.log_file = path;
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.square_width < 3 || self.square_height < 3 {
            return Err(ConfigError::new(format!(
                "Squares must be at least 3x3, got {}x{}",
                self.square_width, self.square_height
            )));
        }
        let geometry = self.geometry();
        if u32::from(self.square_width) * 3 + u32::from(self.line_size) * 2 > u32::from(u16::MAX)
            || u32::from(self.square_height) * 3 + u32::from(self.line_size) * 2
                > u32::from(u16::MAX)
        {
            return Err(ConfigError::new(format!(
                "Board does not fit the screen: {:?}",
                geometry
            )));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.geometry(), BoardGeometry::TERMINAL);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml("seed = 42\nsquare_width = 14\n").expect("valid");
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.square_width(), 14);
        assert_eq!(*config.square_height(), BoardGeometry::TERMINAL.square_height());
        assert_eq!(config.log_file(), &PathBuf::from("mousetoe.log"));
    }

    #[test]
    fn test_tiny_squares_rejected() {
        let err = AppConfig::from_toml("square_height = 2").unwrap_err();
        assert!(err.message.contains("at least 3x3"));
    }

    #[test]
    fn test_bad_type_rejected() {
        let err = AppConfig::from_toml("seed = \"abc\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
