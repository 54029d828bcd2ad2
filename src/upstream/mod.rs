//! Errors raised by backend LLM clients.
//!
//! Each backend client surfaces failures in its own shape. The types here
//! cover the shapes the gateway recognizes; anything else reaches the
//! normalizer as a plain `std::error::Error` and is treated as unknown.

pub mod api_response;
pub mod http;
pub mod rejected;

pub use api_response::ApiResponseError;
pub use rejected::RequestRejected;

use thiserror::Error;

/// Any failure raised while talking to a backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error(transparent)]
    Rejected(#[from] RequestRejected),

    #[error(transparent)]
    ApiResponse(#[from] ApiResponseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Provider error: {provider}: {message}")]
    Provider { provider: String, message: String },
}

impl BackendError {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
