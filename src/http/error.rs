//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::Conflict;
use crate::services::AdmissionError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Structured conflict list for conflict rejections
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conflicts: Vec<Conflict>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            conflicts: Vec::new(),
        }
    }

    pub fn with_conflicts(mut self, conflicts: Vec<Conflict>) -> Self {
        self.conflicts = conflicts;
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Admission rejected: duplicate id
    DuplicateId(String),
    /// Admission rejected: schedule conflicts
    Conflict(Vec<Conflict>),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("INVALID_INPUT", msg))
            }
            AppError::DuplicateId(id) => (
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_ID", format!("duplicate schedule id: {}", id)),
            ),
            AppError::Conflict(conflicts) => (
                StatusCode::CONFLICT,
                ApiError::new(
                    "CONFLICT_DETECTED",
                    format!("conflict detected: {} conflict(s) found", conflicts.len()),
                )
                .with_conflicts(conflicts),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::InvalidInput(msg) => AppError::BadRequest(msg),
            AdmissionError::DuplicateId(id) => AppError::DuplicateId(id),
            AdmissionError::NotFound(id) => {
                AppError::NotFound(format!("schedule not found: {}", id))
            }
            AdmissionError::ConflictDetected { conflicts } => AppError::Conflict(conflicts),
            AdmissionError::Repository(e) => AppError::Internal(e.to_string()),
        }
    }
}
