//! Configuration management

use crate::error::{AbookError, Result};
use crate::infrastructure::Interface;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "abook.toml";

/// Default location of the address book data file
pub const DEFAULT_DATA_FILE: &str = "addressbook.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default)]
    pub interface: Option<Interface>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
            interface: None,
        }
    }
}

impl Config {
    /// Load config from an explicit path, `ABOOK_CONFIG`, or `abook.toml`,
    /// then apply the `ABOOK_FILE` and `ABOOK_INTERFACE` overrides
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let path = std::env::var("ABOOK_CONFIG")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
                Self::load_or_default(&path)?
            }
        };

        if let Ok(data_file) = std::env::var("ABOOK_FILE") {
            config.data_file = PathBuf::from(data_file);
        }
        if let Ok(interface) = std::env::var("ABOOK_INTERFACE") {
            config.interface = Some(interface.parse().map_err(AbookError::Config)?);
        }

        Ok(config)
    }

    /// Load config from `path`; a missing file is an error
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AbookError::Config(format!("Config file not found: {}", path.display()))
            } else {
                AbookError::Io(e)
            }
        })?;

        debug!(path = %path.display(), "loaded config");
        toml::from_str(&contents).map_err(|e| {
            AbookError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from_file(path)
    }
}
