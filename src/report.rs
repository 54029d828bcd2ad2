//! Turning caught errors into HTTP error responses.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

use crate::config::ErrorReportingConfig;
use crate::normalize::{classify, NormalizedError};

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// Normalizes caught errors, logs their cause and builds the response.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    expose_cause: bool,
}

impl ErrorReporter {
    pub fn new(config: &ErrorReportingConfig) -> Self {
        Self {
            expose_cause: config.expose_cause,
        }
    }

    /// Report one caught error. Call once per error.
    pub fn report(&self, error: &(dyn StdError + 'static)) -> (reqwest::StatusCode, ErrorResponse) {
        let failure = classify(error);
        let kind = failure.kind();
        let normalized = NormalizedError::from(failure);

        tracing::error!(
            status_code = normalized.status_code,
            kind = %kind,
            cause = %normalized.cause,
            "Upstream request failed"
        );

        (normalized.status(), self.response(normalized))
    }

    /// Build the response body for an already normalized error.
    pub fn response(&self, normalized: NormalizedError) -> ErrorResponse {
        ErrorResponse {
            detail: ErrorDetail {
                response: normalized.message,
                cause: self.expose_cause.then_some(normalized.cause),
            },
        }
    }
}
