//! Error types for the Q&A server
//!
//! Provides unified error handling using thiserror. Cache misses are not
//! errors and never appear here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, QuestionId};
use crate::repository::RepositoryError;

// == App Error Enum ==
/// Unified error type for the Q&A server.
#[derive(Error, Debug)]
pub enum AppError {
    /// Question or answer does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Caller identity missing
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is not allowed to modify the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Persistence layer failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    pub fn question_not_found(question_id: QuestionId) -> Self {
        AppError::NotFound(format!("Question {} not found", question_id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Repository(RepositoryError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Q&A server.
pub type Result<T> = std::result::Result<T, AppError>;
