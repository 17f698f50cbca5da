pub mod generation;
pub mod health;
pub mod project;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-page                                   generate (POST)
///
/// /projects?userId=                                list summaries (GET)
/// /project?userId=&projectId=                      detail + prompt history (GET)
/// /project                                         delete (DELETE, JSON body)
///
/// /users                                           create (POST)
/// /user/delete                                     delete (DELETE, JSON body)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generation::router())
        .merge(project::router())
        .merge(user::router())
}
