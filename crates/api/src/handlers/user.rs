//! Handlers for user lifecycle endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pagesmith_core::error::CoreError;
use pagesmith_core::generation::reject_nul;
use pagesmith_db::models::user::{CreateUser, User};
use pagesmith_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::validated_body;
use crate::query::UserParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters."))]
    pub name: String,
    #[validate(email(message = "email must be a valid address."))]
    pub email: String,
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<User>)> {
    let body = validated_body(payload)?;
    reject_nul("name", &body.name)?;
    reject_nul("email", &body.email)?;

    let name = body.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be blank.".to_string()).into());
    }

    let input = CreateUser {
        name: name.to_string(),
        email: body.email.trim().to_lowercase(),
    };
    let user = UserRepo::create(&state.pool, &input)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("uq_users_email") =>
            {
                AppError::Core(CoreError::Conflict(
                    "A user with this email already exists.".to_string(),
                ))
            }
            other => AppError::Database(other),
        })?;

    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/user/delete
///
/// Removes the user together with their projects and prompt history.
pub async fn delete(
    State(state): State<AppState>,
    payload: Result<Json<UserParams>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let UserParams { user_id } = validated_body(payload)?;

    if !UserRepo::delete(&state.pool, user_id).await? {
        return Err(CoreError::UserNotFound { user_id }.into());
    }

    tracing::info!(user_id, "User deleted");
    Ok(Json(SuccessResponse::ok()))
}
