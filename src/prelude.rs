//! Convenience re-exports for common use.

pub use crate::config::{ErrorReportingConfig, LoggingConfig, ServiceConfig};
pub use crate::error::{GatewayError, Result};
pub use crate::normalize::{
    classify, normalize, FailureKind, NormalizedError, UpstreamFailure, DEFAULT_ERROR_MESSAGE,
    DEFAULT_STATUS_CODE,
};
pub use crate::report::{ErrorReporter, ErrorResponse};
pub use crate::upstream::{ApiResponseError, BackendError, RequestRejected};
