//! Error types for the gateway client

use noise_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received (connectivity or timeout)
    #[error("{method} {url} failed: {message}")]
    Transport {
        method: String,
        url: String,
        message: String,
        timeout: bool,
    },

    /// The backend answered with an error status other than 401
    #[error("{method} {url} failed with status {status}: {message}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: serde_json::Value,
        message: String,
    },

    /// The backend rejected the stored credential
    #[error("Session expired ({method} {url})")]
    SessionExpired {
        method: String,
        url: String,
        body: serde_json::Value,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// HTTP status code, where the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::SessionExpired { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport { timeout: true, .. })
    }

    /// Response body, where the backend answered
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Status { body, .. } | ApiError::SessionExpired { body, .. } => Some(body),
            _ => None,
        }
    }
}
