use anyhow::Context;
use serde::Deserialize;
use std::{io::ErrorKind, path::PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "cdinventory.toml";
pub const DEFAULT_DATA_FILE: &str = "CDInventory.dat";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Reads the config file, falling back to defaults when it does not exist
    pub fn load(path: &str) -> anyhow::Result<Config> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {path}, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to read config {path}")),
        };
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// data file holding the saved inventory
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}
