//! Client error types

use http::StatusCode;
use shared::TransformError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received (connect, TLS, timeout, body read)
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's own message when it sent
    /// one, otherwise `HTTP {status}: {reason}`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose envelope reported `success: false`
    #[error("{message}")]
    Api { message: String },

    /// Response body could not be turned into the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request rejected before it was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Http`] failure
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl From<TransformError> for ClientError {
    fn from(err: TransformError) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
