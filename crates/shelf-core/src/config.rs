// Rust guideline compliant 2026-10-16

//! Configuration management for Shelf.

use crate::{RecordFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILE: &str = "shelf.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Shelf behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backing file for the inventory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Line codec for the backing file.
    #[serde(default)]
    pub record_format: RecordFormat,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("books.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            record_format: RecordFormat::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `<dir>/shelf.toml` and environment variables.
    ///
    /// # Errors
    ///
    /// See [`Config::load_file`].
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_file(&dir.join(CONFIG_FILE))
    }

    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The given TOML file, if it exists
    /// 3. Environment variables with `SHELF_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment variable or the final values fail validation
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SHELF_DATA_FILE` - Backing file path
    /// - `SHELF_RECORD_FORMAT` - Record format (pipe/jsonl)
    /// - `SHELF_OUTPUT_FORMAT` - Output format (json/table/plain)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SHELF_DATA_FILE") {
            self.data_file = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("SHELF_RECORD_FORMAT") {
            self.record_format = val.parse()?;
        }

        if let Ok(val) = std::env::var("SHELF_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "SHELF_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `data_file` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "data_file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Saves the configuration to `<dir>/shelf.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
