//! Configuration file loading for the board tool.
//!
//! This module provides types and functions for loading display settings and
//! named sample presets from a TOML file.

use board_code::{BitMatrix, BoardCode, BoardCodeError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sample matrix encoded by `demo` when no preset is chosen: a single set
/// cell at row 3, column 6.
pub const DEFAULT_MATRIX: BitMatrix = {
    let mut rows = [[false; 8]; 8];
    rows[3][6] = true;
    BitMatrix::new(rows)
};

/// Sample integer decoded by `demo` when no preset is chosen.
pub const DEFAULT_NUMBER: u64 = 0x8040_0010_0804;

/// Errors that can occur when loading or using configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested preset was not found in the configuration.
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
    /// A preset holds a malformed matrix or number.
    #[error("Invalid preset '{name}': {source}")]
    InvalidPreset {
        name: String,
        #[source]
        source: BoardCodeError,
    },
}

/// Glyphs used when drawing a grid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Glyph for a set cell. Defaults to "X".
    #[serde(default = "default_set_glyph")]
    pub set: String,
    /// Glyph for a clear cell. Defaults to ".".
    #[serde(default = "default_unset_glyph")]
    pub unset: String,
}

fn default_set_glyph() -> String {
    "X".to_string()
}

fn default_unset_glyph() -> String {
    ".".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            set: default_set_glyph(),
            unset: default_unset_glyph(),
        }
    }
}

/// A named pair of samples for the demonstration.
///
/// Either field may be left out, in which case the built-in sample is used.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PresetConfig {
    /// Matrix rows to encode.
    #[serde(default)]
    pub matrix: Option<Vec<String>>,
    /// Number to decode, in decimal, `0x` hex or `0b` binary form.
    #[serde(default)]
    pub number: Option<String>,
}

/// A resolved demonstration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub matrix: BitMatrix,
    pub code: BoardCode,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            matrix: DEFAULT_MATRIX,
            code: BoardCode::new(DEFAULT_NUMBER),
        }
    }
}

/// Main tool configuration.
///
/// Uses `board-tool.toml` in the current directory by default.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ToolConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Map of preset names to their samples.
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
}

impl ToolConfig {
    /// Loads the configuration from disk.
    ///
    /// With no explicit path the default [`Self::config_path()`] is tried and
    /// a missing file yields the default configuration. An explicit path must
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::config_path();
                if !default_path.exists() {
                    tracing::debug!("No config at {:?}, using defaults", default_path);
                    return Ok(Self::default());
                }
                default_path
            }
        };

        tracing::debug!("Loading config from {:?}", config_path);
        let content = std::fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default path of the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("board-tool.toml")
    }

    /// Resolves the demonstration sample, from a preset when one is named.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] for an unknown name and
    /// [`ConfigError::InvalidPreset`] if the preset does not parse.
    pub fn sample(&self, preset: Option<&str>) -> Result<Sample, ConfigError> {
        let Some(name) = preset else {
            return Ok(Sample::default());
        };

        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))?;
        let invalid = |source| ConfigError::InvalidPreset {
            name: name.to_string(),
            source,
        };

        let mut sample = Sample::default();
        if let Some(rows) = &preset.matrix {
            sample.matrix = BitMatrix::from_rows(rows).map_err(invalid)?;
        }
        if let Some(number) = &preset.number {
            sample.code = number.parse().map_err(invalid)?;
        }

        tracing::debug!("Using preset {}", name);
        Ok(sample)
    }
}
