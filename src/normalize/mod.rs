//! Normalization of upstream failures into a single error triple.
//!
//! Every error raised while serving a request is turned into
//! `(status_code, message, cause)`: the status to answer with, the message
//! the API caller sees, and the diagnostic text that goes to the logs.
//!
//! ```
//! use llm_gateway_errors::normalize::{normalize, DEFAULT_STATUS_CODE};
//! use llm_gateway_errors::upstream::RequestRejected;
//!
//! let err = RequestRejected::new("Exception", 400);
//! let (status_code, message, cause) = normalize(&err).into_parts();
//! assert_eq!(status_code, 400);
//! assert_eq!(message, "Exception");
//! assert_eq!(cause, "Exception");
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
//! assert_eq!(normalize(&io).status_code, DEFAULT_STATUS_CODE);
//! ```

pub mod classify;
pub mod server_error;

pub use classify::{classify, FailureKind, UpstreamFailure};
pub use server_error::{Extensions, ServerErrorRecord};

use std::error::Error as StdError;

use serde::Serialize;

/// Status reported for failures that are not recognized.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Message reported for failures that are not recognized.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error while obtaining answer for user question";

/// Header line of rendered structured error records.
pub const SERVER_ERROR_HEADER: &str = "Server Error";

/// Extension code written into every rendered structured error record.
pub const INVALID_INPUT_CODE: &str = "INVALID_INPUT";

/// The normalized `(status_code, message, cause)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedError {
    pub status_code: u16,
    pub message: String,
    pub cause: String,
}

impl NormalizedError {
    pub fn into_parts(self) -> (u16, String, String) {
        (self.status_code, self.message, self.cause)
    }

    /// HTTP status for the response, 500 when `status_code` is not a valid
    /// status.
    pub fn status(&self) -> reqwest::StatusCode {
        reqwest::StatusCode::from_u16(self.status_code)
            .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<NormalizedError> for (u16, String, String) {
    fn from(error: NormalizedError) -> Self {
        error.into_parts()
    }
}

impl From<UpstreamFailure> for NormalizedError {
    fn from(failure: UpstreamFailure) -> Self {
        match failure {
            UpstreamFailure::RequestRejected {
                status_code,
                body_message,
                text,
            } => Self {
                status_code,
                message: body_message.unwrap_or_else(|| text.clone()),
                cause: text,
            },
            UpstreamFailure::StructuredApi(record) => {
                let rendered = record.render();
                Self {
                    status_code: record.status_code,
                    message: rendered.clone(),
                    cause: rendered,
                }
            }
            UpstreamFailure::Unrecognized { text } => Self {
                status_code: DEFAULT_STATUS_CODE,
                message: DEFAULT_ERROR_MESSAGE.to_string(),
                cause: text,
            },
        }
    }
}

/// Normalize any error into the triple the HTTP layer reports.
///
/// Total and side-effect free: every input yields a value.
pub fn normalize(error: &(dyn StdError + 'static)) -> NormalizedError {
    classify(error).into()
}
