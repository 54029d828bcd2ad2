//! Display form of structured upstream error records.

use serde::Serialize;
use serde_json::Value;

use super::{INVALID_INPUT_CODE, SERVER_ERROR_HEADER};

/// Rebuilt structured error record.
///
/// Field order is the rendered key order and must stay alphabetical:
/// `error`, `extensions`, `message`, `status_code`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerErrorRecord {
    pub error: Value,
    pub extensions: Extensions,
    pub message: Value,
    pub status_code: u16,
}

/// Extensions block of a rebuilt record. Always `INVALID_INPUT` with no state;
/// whatever extensions the backend sent are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extensions {
    pub code: &'static str,
    pub state: Option<String>,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            code: INVALID_INPUT_CODE,
            state: None,
        }
    }
}

impl ServerErrorRecord {
    /// Rebuild a record from a raw payload. `error` and `message` are copied
    /// as-is; missing or null ones become empty strings.
    pub fn from_payload(payload: &Value, status_code: u16) -> Self {
        Self {
            error: copied_field(payload, "error"),
            extensions: Extensions::default(),
            message: copied_field(payload, "message"),
            status_code,
        }
    }

    /// `Server Error` header line followed by the record as 2-space JSON.
    pub fn render(&self) -> String {
        // Only strings, numbers and JSON values are serialized here, which
        // cannot fail.
        let body = serde_json::to_string_pretty(self).unwrap_or_default();
        format!("{SERVER_ERROR_HEADER}\n{body}")
    }
}

fn copied_field(payload: &Value, key: &str) -> Value {
    match payload.get(key) {
        Some(Value::Null) | None => Value::String(String::new()),
        Some(value) => value.clone(),
    }
}
