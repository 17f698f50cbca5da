//! Route definitions for page generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// ```text
/// POST   /generate-page                     -> generate_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-page", post(generation::generate_page))
}
