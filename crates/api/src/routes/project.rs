//! Route definitions for per-user projects.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /projects?userId=                  -> list
/// GET    /project?userId=&projectId=        -> get_with_prompts
/// DELETE /project                           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route(
            "/project",
            get(project::get_with_prompts).delete(project::delete),
        )
}
