use crate::types::DbId;

/// Domain errors raised by the generation pipeline and its stores.
///
/// Every variant has a stable machine-readable [`kind`](CoreError::kind);
/// the HTTP layer maps kinds to status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User {user_id} not found")]
    UserNotFound { user_id: DbId },

    /// Also used when the project exists but belongs to another user.
    #[error("Project {project_id} not found for user {user_id}")]
    ProjectNotFound { project_id: DbId, user_id: DbId },

    #[error("User {user_id} has reached the maximum of {limit} projects")]
    ProjectLimit { user_id: DbId, limit: i64 },

    /// The model output could not be parsed as JSON. `raw` is for server
    /// logs only and must never reach a client.
    #[error("Model output is not valid JSON")]
    LlmInvalidJson {
        raw: String,
        expected: [&'static str; 2],
    },

    #[error("Model output is missing string fields: {}", missing.join(", "))]
    LlmMissingFields { missing: Vec<&'static str> },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Stable error code exposed in API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::UserNotFound { .. } => "USER_NOT_FOUND",
            CoreError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            CoreError::ProjectLimit { .. } => "PROJECT_LIMIT",
            CoreError::LlmInvalidJson { .. } => "LLM_INVALID_JSON",
            CoreError::LlmMissingFields { .. } => "LLM_MISSING_FIELDS",
            CoreError::Conflict(_) => "CONFLICT",
        }
    }
}
