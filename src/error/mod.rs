//! Error types for Pictora.

use thiserror::Error;

/// Primary error type for all Pictora operations.
#[derive(Error, Debug)]
pub enum PictoraError {
    /// Base URL or API key missing after normalization.
    #[error("{0}")]
    Configuration(String),

    /// The image endpoint answered with a non-success status.
    #[error("{message}")]
    RemoteApi { status: u16, message: String },

    /// The response was readable but carried no `data:image/...;base64,...` URI.
    #[error("{0}")]
    NoImageFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

impl PictoraError {
    /// Create a remote API error.
    pub fn remote_api(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by a remote API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteApi { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PictoraError>;
