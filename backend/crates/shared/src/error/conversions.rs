//! Error conversions - HTTP response mapping for [`AppError`]
//!
//! Crate-specific errors convert into [`AppError`] in their own crates; this
//! module only turns the unified error into a response.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Plain-text body; server errors never leak their detail
        let body = if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };

        (status, body).into_response()
    }
}
