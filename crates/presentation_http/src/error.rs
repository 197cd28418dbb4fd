//! API error handling
//!
//! The handler layer is the single place where an error indicator
//! becomes an HTTP status and body. Client input errors and reported
//! external-service failures are 400; unexpected faults during file
//! handling or extraction are 500. Bodies are always `{"error": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use document_text::ExtractError;
use serde::Serialize;
use speech::SpeechError;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<SpeechError> for ApiError {
    /// Every failure a speech provider reports is a request-level error,
    /// answered client-side; none is allowed to crash the process.
    fn from(err: SpeechError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat { .. } => Self::BadRequest(err.to_string()),
            ExtractError::Io(_) | ExtractError::Parse(_) => {
                Self::Internal(format!("Error processing file: {err}"))
            },
        }
    }
}
