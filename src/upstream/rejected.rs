//! Request rejected by an upstream HTTP API.

use std::fmt;

use serde_json::Value;

/// An upstream API answered with an error status.
///
/// This is the shape OpenAI-style clients raise for 4xx/5xx responses: the
/// client's own message, the response status, and the decoded JSON body when
/// there was one.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRejected {
    pub message: String,
    pub status_code: u16,
    pub body: Option<Value>,
}

impl RequestRejected {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The body's top-level `message` field, if it is a non-empty string.
    pub fn body_message(&self) -> Option<&str> {
        self.body
            .as_ref()?
            .get("message")?
            .as_str()
            .filter(|message| !message.is_empty())
    }
}

impl fmt::Display for RequestRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestRejected {}
