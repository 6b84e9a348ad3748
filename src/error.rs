use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::envelope::Envelope;

/// Application error type for request handlers
///
/// Every variant maps to an HTTP 500 with a `status: false` envelope,
/// matching the contract the JSON endpoints expose for any failure.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    /// Create an internal server error
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Log this error with appropriate level and context
    pub fn log(&self) {
        tracing::error!(
            error = %self,
            status = %self.status_code().as_u16(),
            "Request failed"
        );
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        self.log();

        let status = self.status_code();
        let body = match self {
            AppError::Upstream(msg) | AppError::Internal(msg) => Envelope::fail(msg),
        };

        (status, axum::Json(body)).into_response()
    }
}
