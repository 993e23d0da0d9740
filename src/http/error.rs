//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
///
/// Not-found and backend failures arrive through [`StoreError`], so the
/// enum only carries the conditions the handlers raise themselves.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Conditional request rejected against the current entity tag
    PreconditionFailed(String),
    /// Store error
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::PreconditionFailed(msg) => (
                StatusCode::PRECONDITION_FAILED,
                ApiError::new("PRECONDITION_FAILED", msg),
            ),
            AppError::Store(e) => match &e {
                StoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", e.to_string()))
                }
                StoreError::Validation { .. } => {
                    (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", e.to_string()))
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("STORE_ERROR", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
