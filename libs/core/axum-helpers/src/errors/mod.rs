pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// { "status_code": 404, "message": "Resource not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    #[schema(example = 404)]
    pub status_code: u16,
    /// Human-readable message
    #[schema(example = "Resource not found")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Every failure that reaches the transport layer passes through here, so the
/// status mapping and the envelope live in one place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The payload names the missing resource for logs; clients always see
    /// the fixed not-found message.
    #[error("Not Found: {0}")]
    NotFound(String),

    /// Detail is logged, never returned.
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Status and client message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::JsonExtractorRejection(e) => match e {
                JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                    (StatusCode::BAD_REQUEST, messages::INVALID_JSON.to_string())
                }
                other => (other.status(), other.body_text()),
            },
            AppError::QueryExtractorRejection(e) => {
                (StatusCode::BAD_REQUEST, messages::query_message(&e.body_text()))
            }
            AppError::ValidationError(e) => {
                (StatusCode::BAD_REQUEST, messages::validation_message(e))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                messages::NOT_FOUND_RESOURCE.to_string(),
            ),
            AppError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::INTERNAL_ERROR.to_string(),
            ),
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "Request rejected");
        }

        error_response(status, message)
    }
}

/// Builds an envelope response outside of [`AppError`], e.g. for fallbacks.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(status, message))).into_response()
}
