//! Logbook configuration file support.
//!
//! Reads export settings from a `logbook.toml` file. Everything has a
//! default, so the file is optional for embedders that are happy with the
//! standard printed layout.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("no logbook.toml found in standard locations")]
    NotFound,
}

/// Logbook configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogbookConfig {
    #[serde(default)]
    pub export: ExportSettings,
}

/// Settings for the exported logbook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Rows printed per page. The default matches the classic bound
    /// logbook layout.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
}

fn default_rows_per_page() -> usize {
    18
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
        }
    }
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            export: ExportSettings::default(),
        }
    }
}

impl LogbookConfig {
    /// Load logbook configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(LogbookConfig)` if read, parsed, and valid
    /// * `Err(ConfigError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: LogbookConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load logbook configuration from the default location.
    ///
    /// Searches for `logbook.toml` in:
    /// 1. Current directory
    /// 2. `rust_core/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("logbook.toml"),
            PathBuf::from("rust_core/logbook.toml"),
            PathBuf::from("../logbook.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.export.rows_per_page == 0 {
            return Err(ConfigError::Invalid(
                "export.rows_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
