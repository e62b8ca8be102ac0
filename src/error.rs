// file: src/error.rs
// version: 3.0.0
// guid: 57b83a63-07b6-4534-aa6c-51e8797254e0

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, SwitchError>;

/// Exit status for a successful invocation
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when the peer could not be reached in time
pub const EXIT_TRANSPORT: i32 = 1;
/// Exit status when the peer answered with a fault or garbage
pub const EXIT_REMOTE: i32 = 2;
/// Exit status for local usage, configuration and validation problems
pub const EXIT_USAGE: i32 = 3;
/// Standard exit code for Ctrl+C
pub const EXIT_INTERRUPTED: i32 = 130;

/// Error types for the remote switch client
#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout error: no response within {0} seconds")]
    Timeout(u64),

    #[error("Remote fault {code}: {message}")]
    RemoteFault { code: i64, message: String },

    #[error("HTTP error: peer returned status {0}")]
    HttpStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unknown capability '{name}' (known: {known})")]
    UnknownCapability { name: String, known: String },

    #[error("Invalid capability name: {0}")]
    InvalidCapability(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SwitchError {
    /// Create a new connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a new remote fault
    pub fn remote_fault(code: i64, message: impl Into<String>) -> Self {
        Self::RemoteFault {
            code,
            message: message.into(),
        }
    }

    /// Create a new malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a new invalid capability error
    pub fn invalid_capability(msg: impl Into<String>) -> Self {
        Self::InvalidCapability(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection(_) | Self::Timeout(_) => EXIT_TRANSPORT,
            Self::RemoteFault { .. } | Self::HttpStatus(_) | Self::MalformedResponse(_) => {
                EXIT_REMOTE
            }
            Self::UnknownCapability { .. }
            | Self::InvalidCapability(_)
            | Self::Config(_)
            | Self::Serialization(_) => EXIT_USAGE,
        }
    }

    /// Short name of the failure kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection(_) => "ConnectionError",
            Self::Timeout(_) => "TimeoutError",
            Self::RemoteFault { .. } => "RemoteFault",
            Self::HttpStatus(_) => "HttpStatus",
            Self::MalformedResponse(_) => "MalformedResponse",
            Self::UnknownCapability { .. } => "UnknownCapability",
            Self::InvalidCapability(_) => "InvalidCapability",
            Self::Config(_) => "ConfigError",
            Self::Serialization(_) => "SerializationError",
        }
    }
}
