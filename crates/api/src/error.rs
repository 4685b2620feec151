use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce the
/// `{"message": ...}` JSON bodies clients observe. Domain error messages
/// pass through verbatim; opaque repository failures are logged and
/// sanitized.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster-core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = self;

        let (status, message) = match &core {
            CoreError::EmailTaken { .. } => (StatusCode::BAD_REQUEST, core.to_string()),
            CoreError::Validation { .. } => (StatusCode::BAD_REQUEST, core.to_string()),
            CoreError::StudentNotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
            CoreError::Repository(err) => {
                tracing::error!(error = %err, "Repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}
