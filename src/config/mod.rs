// file: src/config/mod.rs
// version: 2.0.0
// guid: a1b2c3d4-e5f6-7a8b-9c0d-1e2f3a4b5c6d

//! Configuration module for the remote switch client
//!
//! Holds the endpoint the client talks to and the capability names it is
//! allowed to address. Values come from built-in defaults, an optional TOML
//! file, environment overrides and finally command line flags.

pub mod loader;

pub use loader::ConfigLoader;

use crate::{Result, SwitchError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default management service host
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default management service port
pub const DEFAULT_PORT: u16 = 10000;
/// Default bound on the single round trip
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// Default XML-RPC endpoint path
pub const DEFAULT_PATH: &str = "/xm.rem";
/// Default bridge method that forwards calls to the node's RPC handlers
pub const DEFAULT_PROXY_METHOD: &str = "localproxy";
/// Default method namespace of the remote logging handler
pub const DEFAULT_NAMESPACE: &str = "LogManager";

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: EndpointConfig,
    pub switch: SwitchConfig,
}

/// Where and how to reach the management service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub timeout_seconds: u64,
    /// Bridge method wrapping the call; `None` calls the method directly
    pub proxy_method: Option<String>,
}

/// Which remote methods may be addressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    pub namespace: String,
    /// Capability names registered in addition to `Enable` and `Disable`
    pub capabilities: Vec<String>,
    /// Refuse capability names that are not registered
    pub strict: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            proxy_method: Some(DEFAULT_PROXY_METHOD.to_string()),
        }
    }
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            capabilities: Vec::new(),
            strict: false,
        }
    }
}

impl EndpointConfig {
    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Build the HTTP URL of the XML-RPC endpoint
    pub fn url(&self) -> Result<Url> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        Url::parse(&format!("http://{}:{}{}", host, self.port, path)).map_err(|e| {
            SwitchError::config(format!(
                "Invalid endpoint {}:{}{}: {}",
                self.host, self.port, self.path, e
            ))
        })
    }

    /// Check the shape of the endpoint before any connection is attempted
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(SwitchError::config("Host cannot be empty"));
        }
        if self.port == 0 {
            return Err(SwitchError::config("Port cannot be 0"));
        }
        if self.timeout_seconds == 0 {
            return Err(SwitchError::config("Timeout must be at least one second"));
        }
        if let Some(proxy) = &self.proxy_method {
            if proxy.trim().is_empty() {
                return Err(SwitchError::config("Proxy method cannot be empty"));
            }
        }
        self.url()?;
        Ok(())
    }
}

impl ClientConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.endpoint.validate()
    }
}
