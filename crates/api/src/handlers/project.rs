//! Handlers for the per-user project resources.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use pagesmith_core::error::CoreError;
use pagesmith_core::types::DbId;
use pagesmith_db::models::project::{Project, ProjectSummary};
use pagesmith_db::models::prompt::PromptEntry;
use pagesmith_db::repositories::{ProjectRepo, PromptRepo, UserRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::{validated_body, validated_query};
use crate::query::{UserParams, UserProjectParams};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// `GET /api/projects` response.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}

/// `GET /api/project` response: the project with its prompt history,
/// newest first.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub prompts: Vec<PromptEntry>,
}

async fn ensure_user(state: &AppState, user_id: DbId) -> AppResult<()> {
    if UserRepo::exists(&state.pool, user_id).await? {
        Ok(())
    } else {
        Err(CoreError::UserNotFound { user_id }.into())
    }
}

/// GET /api/projects?userId=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<UserParams>, QueryRejection>,
) -> AppResult<Json<ProjectListResponse>> {
    let UserParams { user_id } = validated_query(params)?;
    ensure_user(&state, user_id).await?;

    let projects = ProjectRepo::list_light_for_user(&state.pool, user_id).await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// GET /api/project?userId=&projectId=
pub async fn get_with_prompts(
    State(state): State<AppState>,
    params: Result<Query<UserProjectParams>, QueryRejection>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let UserProjectParams {
        user_id,
        project_id,
    } = validated_query(params)?;
    ensure_user(&state, user_id).await?;

    let project = ProjectRepo::find_by_id_for_user(&state.pool, project_id, user_id)
        .await?
        .ok_or(CoreError::ProjectNotFound {
            project_id,
            user_id,
        })?;
    let prompts = PromptRepo::list_for_project(&state.pool, project.id).await?;

    Ok(Json(ProjectDetailResponse { project, prompts }))
}

/// DELETE /api/project
pub async fn delete(
    State(state): State<AppState>,
    payload: Result<Json<UserProjectParams>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let UserProjectParams {
        user_id,
        project_id,
    } = validated_body(payload)?;
    ensure_user(&state, user_id).await?;

    if !ProjectRepo::delete_for_user(&state.pool, user_id, project_id).await? {
        return Err(CoreError::ProjectNotFound {
            project_id,
            user_id,
        }
        .into());
    }

    tracing::info!(user_id, project_id, "Project deleted");
    Ok(Json(SuccessResponse::ok()))
}
