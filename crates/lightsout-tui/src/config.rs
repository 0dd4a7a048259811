//! Game configuration.
//!
//! Settings are layered: built-in defaults, then an optional JSON file, then
//! command-line flags.

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Grid sizes offered by the size menu
pub const SUPPORTED_SIZES: [usize; 3] = [3, 4, 5];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported grid size {0} (expected 3, 4 or 5)")]
    InvalidSize(usize),
}

/// Resolved settings for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid size at startup
    pub size: usize,
    /// Re-deal new games until the board can be solved
    pub solvable_only: bool,
    /// Fixed seed for the board generator
    pub seed: Option<u64>,
    /// Log destination; no logging without one
    pub log_file: Option<PathBuf>,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 3,
            solvable_only: false,
            seed: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// `<config dir>/lightsout/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lightsout").join("config.json"))
    }

    /// Load a config file; keys missing from the file keep their defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the session config from the file layer and the command line.
    ///
    /// An explicit `--config` must exist; the default location is optional.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(size) = cli.size {
            self.size = size as usize;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.solvable_only {
            self.solvable_only = true;
        }
        if cli.log_file.is_some() {
            self.log_file = cli.log_file.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_SIZES.contains(&self.size) {
            return Err(ConfigError::InvalidSize(self.size));
        }
        Ok(())
    }
}
