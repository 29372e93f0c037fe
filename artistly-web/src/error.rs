//! Error types for artistly-web

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use artistly_common::onboarding::ValidationErrors;

/// Result alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400), e.g. an unknown filter value
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Conflict (409) - review of an application that is no longer pending
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Onboarding form failed validation (422)
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<artistly_common::Error> for ApiError {
    fn from(err: artistly_common::Error) -> Self {
        use artistly_common::Error as CommonError;

        match err {
            CommonError::NotFound(what) => ApiError::NotFound(what),
            CommonError::InvalidStateTransition { .. } => ApiError::Conflict(err.to_string()),
            CommonError::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, violations) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg, None),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_FAILED",
                errors.to_string(),
                Some(errors.violations),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg,
                None,
            ),
        };

        let mut error = json!({
            "code": error_code,
            "message": message,
        });
        if let Some(violations) = violations {
            error["violations"] = json!(violations);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
