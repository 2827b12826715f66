//! Error types for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use vqeviz_results::LoadError;

use crate::charts::ChartError;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Error: {0}")]
    MissingInputFile(String),

    #[error("Error: {0}")]
    MalformedInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status and machine-readable error kind.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingInputFile(_) => (StatusCode::NOT_FOUND, "missing_input_file"),
            ApiError::MalformedInput(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "malformed_input")
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Chart(_) => (StatusCode::INTERNAL_SERVER_ERROR, "chart_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<LoadError> for ApiError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::MissingInputFile { .. } => ApiError::MissingInputFile(e.to_string()),
            LoadError::MalformedInput { .. } => ApiError::MalformedInput(e.to_string()),
            LoadError::Io { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ChartError> for ApiError {
    fn from(e: ChartError) -> Self {
        ApiError::Chart(e.to_string())
    }
}
