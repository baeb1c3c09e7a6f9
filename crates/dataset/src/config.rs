//! Dataset build configuration

use std::path::{Path, PathBuf};

use replay_core::DEFAULT_OUTCOME_OFFSET;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do with a game whose move text cannot be replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure, record it in the report and keep going
    #[default]
    Skip,
    /// Stop the whole build at the first failing game
    Abort,
}

/// How snapshots are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFormat {
    /// Active one-hot feature indices per snapshot
    #[default]
    Indices,
    /// Signed 8x8 grid per snapshot, eighth rank first
    Codes,
}

/// Dataset build configuration, loaded from TOML
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Lines between a move list and its outcome line
    pub outcome_offset: usize,
    pub on_error: ErrorPolicy,
    /// Worker threads (None = rayon default)
    pub threads: Option<usize>,
    /// Only replay the first N games
    pub max_games: Option<usize>,
    /// Write encoded snapshots; when false only game metadata is written
    pub include_boards: bool,
    pub board_format: BoardFormat,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            outcome_offset: DEFAULT_OUTCOME_OFFSET,
            on_error: ErrorPolicy::Skip,
            threads: None,
            max_games: None,
            include_boards: true,
            board_format: BoardFormat::Indices,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DatasetConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
