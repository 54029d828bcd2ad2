//! Structured error payloads returned by record-style APIs.

use std::fmt;

use serde_json::Value;

/// An upstream API returned a structured error record.
///
/// The payload is expected to look like
/// `{"error": ..., "message": ..., "extensions": {...}, "status_code": 400}`,
/// but it is kept as raw JSON: the record is validated when the failure is
/// classified, not when it is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponseError {
    pub response: Value,
    pub message: Option<String>,
}

impl ApiResponseError {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The payload's `status_code`, when it is a valid HTTP status.
    pub fn status_code(&self) -> Option<u16> {
        payload_status_code(&self.response)
    }
}

/// `status_code` of a raw record payload, when it is a valid HTTP status.
pub(crate) fn payload_status_code(payload: &Value) -> Option<u16> {
    let code = payload.get("status_code")?.as_u64()?;
    let code = u16::try_from(code).ok()?;
    reqwest::StatusCode::from_u16(code).ok().map(|s| s.as_u16())
}

impl fmt::Display for ApiResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str("upstream API returned an error response"),
        }
    }
}

impl std::error::Error for ApiResponseError {}
