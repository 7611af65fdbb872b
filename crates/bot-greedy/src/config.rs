//! Configuration file loading for self-play matches.
//!
//! Settings come from an optional TOML file. Every field has a default, so
//! an empty or missing file yields a single greedy-vs-greedy game.

use crate::runner::PlayerKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Match settings as read from `greedy.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GreedyConfig {
    /// Number of games to play. Defaults to 1.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Plies after which a game is abandoned as unfinished. Defaults to 300.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    /// Base seed; game `i` uses `seed + i`. Drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Player controlling White.
    #[serde(default)]
    pub white: PlayerKind,
    /// Player controlling Black.
    #[serde(default)]
    pub black: PlayerKind,
}

fn default_games() -> u32 {
    1
}

fn default_max_plies() -> usize {
    300
}

impl Default for GreedyConfig {
    fn default() -> Self {
        GreedyConfig {
            games: default_games(),
            max_plies: default_max_plies(),
            seed: None,
            white: PlayerKind::default(),
            black: PlayerKind::default(),
        }
    }
}

impl GreedyConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file is not an error and yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `greedy.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("greedy.toml")
    }
}
