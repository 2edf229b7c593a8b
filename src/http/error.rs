//! HTTP error handling and response types.
//!
//! Both client-input failures and storage failures terminate the request
//! with the same client-error status; they differ only in message content.
//! Storage error detail is passed through to the response body unredacted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::params::ParamError;
use crate::db::repository::RepositoryError;

/// API error response body: `{"error": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message or raw storage failure
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request input, rejected before any storage access
    BadRequest(String),
    /// Storage failure, surfaced once with no retry
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = match self {
            AppError::BadRequest(msg) => ApiError::new(msg),
            AppError::Repository(e) => ApiError::new(e.to_string()),
        };

        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
