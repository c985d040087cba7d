//! Error types for the library administration client

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The request never produced a response (connection refused, DNS, TLS...)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    /// `body` holds the parsed JSON error payload when there was one.
    #[error("Request failed with status code {}", .status.as_u16())]
    Http {
        status: StatusCode,
        body: Option<Value>,
    },

    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Usage(String),
}

impl AppError {
    /// HTTP status of the failed call, when the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// The `error` field of the server's JSON error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http { body: Some(body), .. } => body
                .get("error")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty()),
            _ => None,
        }
    }

    /// Message shown to the user when an action fails.
    ///
    /// The server's `error` string wins; everything else falls back to the
    /// generic description of the failure.
    pub fn display_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
