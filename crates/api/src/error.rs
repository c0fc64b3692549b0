use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use survey_core::error::CoreError;

/// Error returned by every handler.
///
/// Renders as `{"error": <message>, "code": <CODE>}`. Storage errors are
/// classified by SQLSTATE; anything unrecognised becomes a sanitized 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Absent row or rejected input, raised by handlers or the changeset layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure reported by sqlx, passed through from the repositories.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with key {key} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Map a sqlx error onto status, code and client-facing message.
///
/// - `RowNotFound` (a row vanished mid-update) is a 404.
/// - `23505` on a `uq_` constraint or a natural `pk_` key is a 409.
/// - `23503` is a 409: the referenced row is missing, or a restricting
///   child still points at the row being deleted.
/// - Everything else is logged and reported as an opaque 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        let conflict = match db_err.code().as_deref() {
            Some("23505") if constraint.starts_with("uq_") || constraint.starts_with("pk_") => {
                Some(format!("Duplicate value violates unique constraint: {constraint}"))
            }
            Some("23503") => Some(format!(
                "Referenced row is missing or still in use: {constraint}"
            )),
            _ => None,
        };
        if let Some(message) = conflict {
            return (StatusCode::CONFLICT, "CONFLICT", message);
        }
    }

    tracing::error!(error = %err, "Unhandled database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
