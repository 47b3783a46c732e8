//! Error types and error handling for the bookmarks gateway.
//!
//! This module defines the error types used throughout the
//! application. The HTTP status mapping lives in the `http` adapter.

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),

    /// The external bookmark tool failed or produced unusable output.
    ///
    /// `error` is the client-facing summary, `message` carries the
    /// tool's diagnostics (one entry per non-empty stderr line) when
    /// there are any worth reporting.
    #[error("{error}")]
    Upstream {
        error: String,
        message: Option<Vec<String>>,
    },

    #[error("Bookmark tool timed out after {after_secs}s")]
    ToolTimeout { after_secs: u64 },

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GatewayError {
    /// Upstream failure without tool diagnostics
    pub fn upstream(error: impl Into<String>) -> Self {
        GatewayError::Upstream {
            error: error.into(),
            message: None,
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, GatewayError::BadRequest(_))
    }

    /// Check if the external tool is to blame
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GatewayError::Upstream { .. } | GatewayError::ToolTimeout { .. }
        )
    }

    /// Tool diagnostics attached to an upstream failure
    pub fn details(&self) -> Option<&[String]> {
        match self {
            GatewayError::Upstream {
                message: Some(lines),
                ..
            } => Some(lines),
            _ => None,
        }
    }
}
