//! Error types for the API layer

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code as a string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let response = ErrorResponse {
            error: self.error_code().to_string(),
            message: self.to_string(),
            code: status.as_u16(),
        };

        tracing::warn!(error = %self, status = %status, "request failed");

        (status, Json(response)).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bad_request_status() {
        let fixture = ApiError::BadRequest("too many events".to_string());
        assert_eq!(fixture.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(fixture.error_code(), "BAD_REQUEST");
    }

    #[test]
    fn test_bad_request_display() {
        let fixture = ApiError::BadRequest("too many events (max 100)".to_string());
        assert_eq!(format!("{fixture}"), "bad request: too many events (max 100)");
    }
}
