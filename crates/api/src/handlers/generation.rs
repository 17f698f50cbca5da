//! Handler for `POST /api/generate-page`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use pagesmith_core::generation::{validate_project_name, validate_prompt};
use pagesmith_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

use crate::engine::{GeneratePage, GenerationResult, GenerationService};
use crate::error::AppResult;
use crate::handlers::validated_body;
use crate::state::AppState;

/// Request body for page generation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePageRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer."))]
    pub user_id: DbId,
    #[validate(range(min = 1, message = "projectId must be a positive integer when provided."))]
    pub project_id: Option<DbId>,
    pub project_name: Option<String>,
    pub prompt: String,
}

/// POST /api/generate-page
///
/// Creates a project (no `projectId`) or refines an owned one, returning
/// `{ projectId, html, react }`.
pub async fn generate_page(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePageRequest>, JsonRejection>,
) -> AppResult<Json<GenerationResult>> {
    let body = validated_body(payload)?;
    validate_prompt(&body.prompt)?;
    validate_project_name(body.project_name.as_deref())?;

    let input = GeneratePage {
        user_id: body.user_id,
        project_id: body.project_id,
        project_name: body.project_name,
        prompt: body.prompt,
    };

    let result = GenerationService::from_state(&state).generate(&input).await?;
    Ok(Json(result))
}
