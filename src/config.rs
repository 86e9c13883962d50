//! Front-end configuration resolved from command-line flags and environment.
//!
//! Flags come from `clap` (which already folds in `CRITTERBOARD_*` env
//! fallbacks); this module turns the raw strings into typed settings and
//! loads the level they point at.

use std::path::{Path, PathBuf};

use gameboard::level::{Level, LevelError};

use crate::render::Glyphs;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("failed to read level file {path}: {source}")]
    ReadLevel {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid level file {path}: {source}")]
    InvalidLevel {
        path: PathBuf,
        #[source]
        source: LevelError,
    },
}

/// Where the board's level comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSource {
    /// The compiled-in reference level.
    Reference,
    /// A JSON level file.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub level: LevelSource,
    pub log_level: tracing::Level,
    pub glyphs: Glyphs,
}

impl AppConfig {
    /// Build typed config from raw flag values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unrecognized log level.
    pub fn from_args(level: Option<PathBuf>, log_level: Option<&str>, ascii: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            level: level.map_or(LevelSource::Reference, LevelSource::File),
            log_level: parse_log_level(log_level)?,
            glyphs: if ascii { Glyphs::Ascii } else { Glyphs::Unicode },
        })
    }

    /// Load and validate the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadLevel`] if the file cannot be read and
    /// [`ConfigError::InvalidLevel`] if it does not hold a valid level.
    pub fn load_level(&self) -> Result<Level, ConfigError> {
        match &self.level {
            LevelSource::Reference => Ok(Level::reference()),
            LevelSource::File(path) => load_level_file(path),
        }
    }
}

fn load_level_file(path: &Path) -> Result<Level, ConfigError> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadLevel { path: path.to_path_buf(), source })?;
    Level::from_json(&json).map_err(|source| ConfigError::InvalidLevel { path: path.to_path_buf(), source })
}

fn parse_log_level(raw: Option<&str>) -> Result<tracing::Level, ConfigError> {
    match raw.unwrap_or(DEFAULT_LOG_LEVEL).trim().to_ascii_lowercase().as_str() {
        "error" => Ok(tracing::Level::ERROR),
        "warn" | "warning" => Ok(tracing::Level::WARN),
        "info" => Ok(tracing::Level::INFO),
        "debug" => Ok(tracing::Level::DEBUG),
        "trace" => Ok(tracing::Level::TRACE),
        other => Err(ConfigError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
