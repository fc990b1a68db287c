//! # API Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Receipt API                        │
//! │                                                                         │
//! │  JSON syntax / missing field ──► ApiError::BadRequest ──► 400           │
//! │  ValidationReport ─────────────► ApiError::BadRequest ──► 400           │
//! │  unknown or malformed id ──────► ApiError::NotFound ────► 404           │
//! │  StoreError ───────────────────► ApiError::Internal ────► 500 (logged)  │
//! │                                                                         │
//! │  Responses carry the status code only. Which field failed is logged,   │
//! │  never returned to the caller.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use receipt_core::ValidationReport;
use receipt_store::StoreError;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request")]
    BadRequest,

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationReport> for ApiError {
    fn from(_: ValidationReport) -> Self {
        ApiError::BadRequest
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(message) = &self {
            error!(%message, "Request failed");
        }
        self.status_code().into_response()
    }
}

/// Errors that stop the server itself.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
