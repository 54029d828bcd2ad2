//! Error normalization for an LLM proxy gateway.
//!
//! Backend clients fail in different shapes. This crate classifies any
//! caught error into one of a closed set of upstream failure kinds and
//! normalizes it into a `(status_code, message, cause)` triple that the HTTP
//! layer reports uniformly.
//!
//! # Quick Start
//!
//! ```
//! use llm_gateway_errors::prelude::*;
//!
//! let err = BackendError::from_status(429, r#"{"message":"slow down"}"#);
//! let normalized = normalize(&err);
//! assert_eq!(normalized.status_code, 429);
//! assert_eq!(normalized.message, "slow down");
//!
//! let reporter = ErrorReporter::new(&ErrorReportingConfig::default());
//! let (status, body) = reporter.report(&err);
//! assert_eq!(status.as_u16(), 429);
//! assert_eq!(body.detail.cause, None);
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod prelude;
pub mod report;
pub mod telemetry;
pub mod upstream;
