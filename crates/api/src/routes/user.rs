//! Route definitions for user lifecycle.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// POST   /users                             -> create
/// DELETE /user/delete                       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(user::create))
        .route("/user/delete", delete(user::delete))
}
