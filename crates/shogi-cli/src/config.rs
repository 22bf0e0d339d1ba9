//! Configuration file loading for the terminal client.
//!
//! Settings come from `shogi.toml` in the current directory unless another
//! path is given. Every field is optional.

use crate::render::Style;
use serde::{Deserialize, Serialize};
use shogi_engine::GameOptions;
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

/// Game session policies.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Promote whenever promotion is allowed. Defaults to true.
    #[serde(default = "default_true")]
    pub auto_promote: bool,
    /// End the game on any check. Defaults to true.
    #[serde(default = "default_true")]
    pub end_on_check: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            auto_promote: true,
            end_on_check: true,
        }
    }
}

impl From<GameConfig> for GameOptions {
    fn from(config: GameConfig) -> Self {
        GameOptions {
            auto_promote: config.auto_promote,
            end_on_check: config.end_on_check,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Board display settings.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    /// Piece glyphs. Defaults to kanji.
    #[serde(default)]
    pub style: Style,
}

/// Main client configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ShogiConfig {
    /// Log level for diagnostics on stderr. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ShogiConfig {
    fn default() -> Self {
        ShogiConfig {
            log_level: default_log_level(),
            game: GameConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl ShogiConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(Self::parse(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the default path of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("shogi.toml")
    }
}
