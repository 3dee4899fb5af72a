//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request parameter is missing
    #[error("Missing parameter: {0}")]
    MissingParam(&'static str),

    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// No authenticated wallet session on the request
    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    /// The upstream service could not be reached
    #[error("Upstream unreachable: {0}")]
    Upstream(String),

    /// Session store error
    #[error("Session error: {0}")]
    Session(#[from] crate::session::SessionError),

    /// Service not configured / dependency down
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::MissingParam(_) => (StatusCode::BAD_REQUEST, "MISSING_PARAMETER"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNREACHABLE"),
            ApiError::Session(_) => (StatusCode::BAD_GATEWAY, "SESSION_STORE_ERROR"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        // Log the error
        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

impl From<crate::discord::DiscordError> for ApiError {
    fn from(e: crate::discord::DiscordError) -> Self {
        use crate::discord::DiscordError;
        match e {
            DiscordError::NotConfigured(what) => {
                ApiError::ServiceUnavailable(format!("discord proxy not configured: {what}"))
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<crate::auto::AutoError> for ApiError {
    fn from(e: crate::auto::AutoError) -> Self {
        use crate::auto::AutoError;
        match e {
            AutoError::NotConfigured(what) => {
                ApiError::ServiceUnavailable(format!("nance-auto not configured: {what}"))
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<crate::snapshot::SnapshotError> for ApiError {
    fn from(e: crate::snapshot::SnapshotError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::MissingParam("command").into_response().status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Unauthorized("no session").into_response().status(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Upstream("connect refused".into())
                    .into_response()
                    .status(),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::ServiceUnavailable("no redis".into())
                    .into_response()
                    .status(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (got, want) in cases {
            assert_eq!(got, want);
        }
    }
}
