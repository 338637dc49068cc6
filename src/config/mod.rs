// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputSettings, RankSettings};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RankError, Result};

/// Looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE: &str = "edgerank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `edgerank.toml` from the working directory if present.
    ///
    /// # Errors
    /// Returns error if an explicit path is missing, or if the file is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::new())
                }
            }
        }
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content).map_err(|reason| RankError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(target: "edgerank.config", path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parses TOML text, filling absent keys with defaults.
    ///
    /// # Errors
    /// Returns the parser message if the text is invalid.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Renders the effective configuration.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
