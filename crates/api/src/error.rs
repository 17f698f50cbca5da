use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagesmith_core::error::CoreError;
use pagesmith_llm::LlmError;
use serde_json::json;

/// Message returned for every 500 that is not a model-contract violation.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pagesmith_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The LLM provider failed (network, status, envelope).
    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Upstream provider errors ---
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "LLM provider failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_FAILURE",
                    "AI generation failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, its stable kind, and a client-safe
/// message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    let code = err.kind();
    match err {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, code, msg.clone()),
        CoreError::UserNotFound { .. } => {
            (StatusCode::NOT_FOUND, code, "User not found.".to_string())
        }
        CoreError::ProjectNotFound { .. } => (
            StatusCode::NOT_FOUND,
            code,
            "Project not found for this user.".to_string(),
        ),
        CoreError::ProjectLimit { limit, .. } => (
            StatusCode::BAD_REQUEST,
            code,
            format!("User has reached the maximum of {limit} projects."),
        ),
        CoreError::LlmInvalidJson { raw, expected } => {
            tracing::error!(raw_output = %raw, "Model output is not valid JSON");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                format!(
                    "Model did not return valid JSON with '{}' and '{}'.",
                    expected[0], expected[1]
                ),
            )
        }
        CoreError::LlmMissingFields { missing } => {
            tracing::error!(?missing, "Model output is missing required fields");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                format!("Model JSON missing string fields: {}.", missing.join(", ")),
            )
        }
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, code, msg.clone()),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
