//! Client-facing error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors surfaced to the caller. Upstream failures never appear here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure while building the response.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest(message) => serde_json::json!({
                "error": message,
                "status": "error",
            }),
            ApiError::Internal(details) => serde_json::json!({
                "error": "Internal server error",
                "details": details,
                "status": "error",
            }),
        };
        (status, Json(body)).into_response()
    }
}
