//! Building backend errors from failed HTTP exchanges.

use serde_json::Value;

use super::api_response::payload_status_code;
use super::{ApiResponseError, BackendError, RequestRejected};

impl BackendError {
    /// Build the error for a non-success HTTP response.
    ///
    /// Structured records (an error `status_code` plus `error` or `message`)
    /// become [`BackendError::ApiResponse`]; every other body becomes
    /// [`BackendError::Rejected`] with the JSON body attached when it parses.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();

        match parsed {
            Some(value) if is_structured_record(&value) => ApiResponseError::new(value).into(),
            Some(value) => rejected(status, body).with_body(value).into(),
            None => rejected(status, body).into(),
        }
    }

    /// Read a failed response and build the matching error.
    ///
    /// Callers are expected to pass responses whose status is already known
    /// to be an error.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Self::from_status(status, &body),
            Err(e) => Self::Network(e),
        }
    }
}

fn rejected(status: u16, body: &str) -> RequestRejected {
    RequestRejected::new(format!("API error (status {status}): {body}"), status)
}

fn is_structured_record(value: &Value) -> bool {
    let Some(record) = value.as_object() else {
        return false;
    };
    let error_status = payload_status_code(value).is_some_and(|code| code >= 400);
    error_status && (record.contains_key("error") || record.contains_key("message"))
}
