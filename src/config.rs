//! Service configuration file support.
//!
//! This module provides utilities for reading service configuration from
//! TOML configuration files. Environment overrides for the bind address
//! are applied by the server binary, not here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::StoreError;

/// Service configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Optional JSON file with book drafts loaded at startup.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Load service configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServiceConfig)` if successful
    /// * `Err(StoreError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: ServiceConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load service configuration from the default location.
    ///
    /// Searches for `bookshelf.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(ServiceConfig)` if found and parsed successfully
    /// * `Err(StoreError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = vec![
            PathBuf::from("bookshelf.toml"),
            PathBuf::from("config/bookshelf.toml"),
            PathBuf::from("../bookshelf.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::configuration(
            "No bookshelf.toml found in standard locations".to_string(),
        ))
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
