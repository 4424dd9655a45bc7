//! Error types for qaqf-cg HTTP handlers

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::wizard::WizardError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Wizard navigation or generation precondition failed
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// qaqf-common error
    #[error("Common error: {0}")]
    Common(#[from] qaqf_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Wizard(ref err) => match err {
                WizardError::StepIncomplete { .. } => {
                    (StatusCode::BAD_REQUEST, "STEP_INCOMPLETE", err.to_string())
                }
                WizardError::MissingData(_) => {
                    (StatusCode::BAD_REQUEST, "MISSING_DATA", err.to_string())
                }
                WizardError::NotOnReviewStep { .. } => {
                    (StatusCode::CONFLICT, "NOT_ON_REVIEW_STEP", err.to_string())
                }
            },
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
            ApiError::Common(ref err) => match err {
                qaqf_common::Error::UnknownLevel(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMMON_ERROR",
                    err.to_string(),
                ),
            },
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Wizard(WizardError::StepIncomplete { step: 2 }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Wizard(WizardError::NotOnReviewStep { step: 1 }),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Common(qaqf_common::Error::UnknownLevel(12)),
                StatusCode::NOT_FOUND,
            ),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
