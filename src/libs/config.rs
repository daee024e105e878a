//! Configuration management.
//!
//! Settings come from three layers, weakest first: built-in defaults, an
//! optional JSON config file in the platform data directory, and the
//! `MONGO_URI` / `DB_NAME` environment variables (`.env` files are loaded by
//! `main` before anything reads the environment). A missing config file is
//! not an error; a corrupt one is.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_CONNECTION_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "task_manager";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// MongoDB connection string.
    pub connection_uri: String,

    /// Logical database holding the `tasks` collection.
    pub database_name: String,

    /// Whether `add-bulk` stops at the first store failure (`true`) or
    /// keeps inserting the remaining tasks (`false`). The `--best-effort`
    /// flag overrides this per invocation.
    pub bulk_atomic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            connection_uri: DEFAULT_CONNECTION_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            bulk_atomic: true,
        }
    }
}

impl Config {
    /// Load the effective configuration: file values under environment
    /// overrides, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config = Self::read_file()?;
        Ok(config.with_env_overrides(|name| env::var(name).ok()))
    }

    fn read_file() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Apply environment overrides through an injectable lookup, so tests
    /// can exercise the precedence rules without touching the process
    /// environment.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(uri) = lookup("MONGO_URI") {
            self.connection_uri = uri;
        }
        if let Some(name) = lookup("DB_NAME") {
            self.database_name = name;
        }
        self
    }

    /// Write this configuration to the config file, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
