//! Mapping arbitrary errors onto the recognized upstream failure shapes.

use std::error::Error as StdError;

use strum::{Display, IntoStaticStr};

use super::server_error::ServerErrorRecord;
use crate::upstream::{ApiResponseError, BackendError, RequestRejected};

/// An upstream failure, reduced to the fields normalization reads.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamFailure {
    /// The upstream answered with an HTTP error status.
    RequestRejected {
        status_code: u16,
        body_message: Option<String>,
        text: String,
    },
    /// The upstream returned a structured error record.
    StructuredApi(ServerErrorRecord),
    /// Anything else.
    Unrecognized { text: String },
}

/// Tag of an [`UpstreamFailure`], used in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    RequestRejected,
    StructuredApi,
    Unrecognized,
}

impl UpstreamFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::RequestRejected { .. } => FailureKind::RequestRejected,
            Self::StructuredApi(_) => FailureKind::StructuredApi,
            Self::Unrecognized { .. } => FailureKind::Unrecognized,
        }
    }
}

/// Classify an error into exactly one [`UpstreamFailure`].
///
/// Only the error itself is inspected, not its `source()` chain. A
/// [`BackendError`] is unwrapped to the failure it carries first.
pub fn classify(error: &(dyn StdError + 'static)) -> UpstreamFailure {
    if let Some(backend) = error.downcast_ref::<BackendError>() {
        return classify_backend(backend);
    }
    if let Some(rejected) = error.downcast_ref::<RequestRejected>() {
        return from_rejected(rejected);
    }
    if let Some(api) = error.downcast_ref::<ApiResponseError>() {
        return from_api_response(api);
    }
    if let Some(http) = error.downcast_ref::<reqwest::Error>() {
        return from_reqwest(http);
    }
    unrecognized(error)
}

fn classify_backend(error: &BackendError) -> UpstreamFailure {
    match error {
        BackendError::Rejected(rejected) => from_rejected(rejected),
        BackendError::ApiResponse(api) => from_api_response(api),
        BackendError::Network(http) => from_reqwest(http),
        other => unrecognized(other),
    }
}

fn from_rejected(error: &RequestRejected) -> UpstreamFailure {
    UpstreamFailure::RequestRejected {
        status_code: error.status_code,
        body_message: error.body_message().map(str::to_string),
        text: error.to_string(),
    }
}

fn from_api_response(error: &ApiResponseError) -> UpstreamFailure {
    match error.status_code() {
        Some(status_code) => UpstreamFailure::StructuredApi(ServerErrorRecord::from_payload(
            &error.response,
            status_code,
        )),
        None => unrecognized(error),
    }
}

fn from_reqwest(error: &reqwest::Error) -> UpstreamFailure {
    match error.status() {
        Some(status) => UpstreamFailure::RequestRejected {
            status_code: status.as_u16(),
            body_message: None,
            text: error.to_string(),
        },
        None => unrecognized(error),
    }
}

fn unrecognized(error: &dyn StdError) -> UpstreamFailure {
    UpstreamFailure::Unrecognized {
        text: error.to_string(),
    }
}
