//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MediaHub                               │
//! │                                                                         │
//! │  Handler                                                               │
//! │  Result<Json<T>, ApiError>                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ValidationError? ─── bad id / missing q / bad body ──► 400            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::MediaNotFound ──────────────────────────► 404              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError (incl. dangling top download) ── logged ─► 500             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ───────────────────────────────────────────► 200              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The client only ever sees `{"message": "..."}`. Internal detail goes to
//! the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use mediahub_core::{CoreError, ValidationError};

/// Error classification, used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Anything else (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// { "message": "Media not found" }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    #[serde(skip)]
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Rejects input with a fixed client-facing message, logging the detail.
    pub fn rejected(err: &ValidationError, message: impl Into<String>) -> Self {
        warn!(field = err.field(), error = %err, "Rejected request input");
        ApiError::validation(message)
    }

    /// Rejects a request an extractor could not read (bad JSON, repeated
    /// query keys, undecodable path segments).
    pub fn unreadable(rejection: impl std::fmt::Display, message: impl Into<String>) -> Self {
        warn!(error = %rejection, "Unreadable request");
        ApiError::validation(message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MediaNotFound(_) => ApiError::not_found("Media not found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Maps any failure into a 500 with a fixed message.
pub trait OrInternal<T> {
    fn or_internal(self, message: &'static str) -> ApiResult<T>;
}

impl<T, E: std::fmt::Display> OrInternal<T> for Result<T, E> {
    fn or_internal(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|e| {
            error!(error = %e, "{}", message);
            ApiError::internal(message)
        })
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
