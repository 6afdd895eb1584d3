//! Catalog configuration
//!
//! Credentials and endpoint overrides load from `~/.showdown/config.toml`;
//! everything has a sensible default except the API key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for the TMDB source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (v3 auth).
    pub api_key: String,
    /// Endpoint override, mostly for tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// ISO 639-1 language for descriptive fields.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            language: default_language(),
        }
    }

    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from the standard location, `~/.showdown/config.toml`.
    pub fn load_default() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Self::from_file(&home.join(".showdown").join("config.toml"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Could not parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("No home directory available")]
    NoHomeDir,
}
