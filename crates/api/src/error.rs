use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marketplace_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the database variant.
/// Implements [`IntoResponse`] to produce the service's plain-text error
/// bodies: 404 for missing records, 500 for everything the storage layer
/// rejects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marketplace-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                // Required-field violations keep the external contract of a
                // storage rejection even though they are caught before the
                // insert: an opaque 500, never a silent success.
                CoreError::Validation(msg) => {
                    tracing::warn!(error = %msg, "Rejected invalid payload");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, message).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else (connectivity loss, constraint violations) maps to a
///   generic 500 with the cause logged server-side only.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Product not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}
