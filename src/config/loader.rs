// file: src/config/loader.rs
// version: 2.0.0
// guid: d4e5f6g7-h8i9-0123-4567-890123defghi

//! Configuration file loading and environment variable overrides

use super::ClientConfig;
use crate::{Result, SwitchError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the endpoint host
pub const ENV_HOST: &str = "REMOTE_SWITCH_HOST";
/// Environment variable overriding the endpoint port
pub const ENV_PORT: &str = "REMOTE_SWITCH_PORT";
/// Environment variable overriding the timeout in seconds
pub const ENV_TIMEOUT: &str = "REMOTE_SWITCH_TIMEOUT";
/// Environment variable overriding the endpoint path
pub const ENV_PATH: &str = "REMOTE_SWITCH_PATH";

/// Configuration loader with environment variable overrides
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader that sees only the given variables
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Set environment variable for overrides
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Location of the per-user configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("remote-switch").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the per-user file is used
    /// when present, otherwise the built-in defaults.
    pub fn load(&self, path: Option<&Path>) -> Result<ClientConfig> {
        let config = match path {
            Some(path) => self.load_file(path)?,
            None => match Self::user_config_path() {
                Some(user_config) if user_config.exists() => self.load_file(&user_config)?,
                _ => ClientConfig::default(),
            },
        };

        let config = self.apply_env_overrides(config)?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_file(&self, path: &Path) -> Result<ClientConfig> {
        info!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            SwitchError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            SwitchError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&self, mut config: ClientConfig) -> Result<ClientConfig> {
        if let Some(host) = self.env_vars.get(ENV_HOST) {
            config.endpoint.host = host.clone();
        }

        if let Some(port) = self.env_vars.get(ENV_PORT) {
            config.endpoint.port = port.parse().map_err(|_| {
                SwitchError::config(format!("{} is not a valid port: {}", ENV_PORT, port))
            })?;
        }

        if let Some(timeout) = self.env_vars.get(ENV_TIMEOUT) {
            config.endpoint.timeout_seconds = timeout.parse().map_err(|_| {
                SwitchError::config(format!(
                    "{} is not a number of seconds: {}",
                    ENV_TIMEOUT, timeout
                ))
            })?;
        }

        if let Some(path) = self.env_vars.get(ENV_PATH) {
            config.endpoint.path = path.clone();
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
