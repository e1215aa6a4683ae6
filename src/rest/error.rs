//! API error types and responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DocError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found
    NotFound(String),
    /// Validation error
    ValidationError(String),
    /// AI provider failed or is unreachable
    AiUnavailable(String),
    /// Internal server error
    InternalError(String),
    /// Bad request
    BadRequest(String),
}

/// Error response body
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::AiUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "ai_service_unavailable", msg)
            }
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<DocError> for ApiError {
    fn from(err: DocError) -> Self {
        match err {
            DocError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DocError::Validation(_) => ApiError::ValidationError(err.to_string()),
            DocError::AiUnavailable { .. } => ApiError::AiUnavailable(err.to_string()),
            DocError::Storage(_) | DocError::Serialization(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("JSON error: {err}"))
    }
}
