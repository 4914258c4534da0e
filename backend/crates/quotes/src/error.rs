//! Quote Error Types
//!
//! This module provides quote-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Quote-specific result type alias
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Quote-specific error variants
///
/// Every variant is handled at the request boundary and mapped to a status
/// code with a short plain-text message. None of them is retried.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Request body is not a parseable quote payload
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    /// Missing/empty required field or malformed parameter
    #[error("{0}")]
    Validation(String),

    /// Referenced quote does not exist
    #[error("{0}")]
    NotFound(String),

    /// Response encoding failed
    #[error("Failed to encode response: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A thread panicked while holding the store lock
    #[error("Quote store lock poisoned")]
    StorePoisoned,

    /// Every id up to `u64::MAX` has been issued
    #[error("Quote ids exhausted")]
    IdsExhausted,
}

impl QuoteError {
    pub fn validation(message: impl Into<String>) -> Self {
        QuoteError::Validation(message.into())
    }

    pub fn quote_not_found(id: impl std::fmt::Display) -> Self {
        QuoteError::NotFound(format!("Quote {id} not found"))
    }

    pub fn no_quotes() -> Self {
        QuoteError::NotFound("No quotes exist".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuoteError::InvalidBody(_) | QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
            QuoteError::NotFound(_) => StatusCode::NOT_FOUND,
            QuoteError::Serialization(_)
            | QuoteError::StorePoisoned
            | QuoteError::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuoteError::InvalidBody(_) | QuoteError::Validation(_) => ErrorKind::BadRequest,
            QuoteError::NotFound(_) => ErrorKind::NotFound,
            QuoteError::Serialization(_)
            | QuoteError::StorePoisoned
            | QuoteError::IdsExhausted => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuoteError::Serialization(e) => {
                tracing::error!(error = %e, "Failed to encode quote response");
            }
            QuoteError::StorePoisoned => {
                tracing::error!("Quote store lock poisoned");
            }
            QuoteError::IdsExhausted => {
                tracing::error!("Quote id space exhausted");
            }
            QuoteError::InvalidBody(e) => {
                tracing::warn!(error = %e, "Rejected malformed quote payload");
            }
            _ => {
                tracing::debug!(error = %self, "Quote request failed");
            }
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}

impl<T> From<std::sync::PoisonError<T>> for QuoteError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        QuoteError::StorePoisoned
    }
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
