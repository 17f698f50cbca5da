//! Generation orchestrator.
//!
//! Runs one generation cycle for a user: ownership and history lookup,
//! prompt composition, the LLM call, output validation, then the project
//! write followed by the history append. Nothing is persisted unless the
//! model output validates.

use std::sync::Arc;
use std::time::Instant;

use pagesmith_core::error::CoreError;
use pagesmith_core::generation::{resolve_project_name, MAX_PROJECTS_PER_USER};
use pagesmith_core::page_output::{parse_page_output, OutputProfile};
use pagesmith_core::prompt_builder::build_prompt;
use pagesmith_core::types::DbId;
use pagesmith_db::models::project::{CreateProject, UpdateProjectCode};
use pagesmith_db::repositories::{ProjectCreation, ProjectRepo, PromptRepo, UserRepo};
use pagesmith_db::DbPool;
use pagesmith_llm::PageGenerator;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// A validated generation request.
#[derive(Debug, Clone)]
pub struct GeneratePage {
    pub user_id: DbId,
    /// Refine this project instead of creating a new one.
    pub project_id: Option<DbId>,
    /// Name for a new project; ignored when `project_id` is set.
    pub project_name: Option<String>,
    pub prompt: String,
}

/// Outcome of a successful generation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub project_id: DbId,
    pub html: String,
    pub react: String,
}

/// Composes the user store, history store, LLM backend and project store.
#[derive(Clone)]
pub struct GenerationService {
    pool: DbPool,
    generator: Arc<dyn PageGenerator>,
    profile: OutputProfile,
}

impl GenerationService {
    pub fn new(pool: DbPool, generator: Arc<dyn PageGenerator>, profile: OutputProfile) -> Self {
        Self {
            pool,
            generator,
            profile,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.pool.clone(),
            Arc::clone(&state.generator),
            state.config.generation_profile,
        )
    }

    /// Run a full generation cycle.
    ///
    /// Side effects happen in order: LLM call, project write, history
    /// append. A failure between the last two leaves the project updated
    /// without a history entry.
    pub async fn generate(&self, input: &GeneratePage) -> AppResult<GenerationResult> {
        let user_id = input.user_id;

        if !UserRepo::exists(&self.pool, user_id).await? {
            return Err(CoreError::UserNotFound { user_id }.into());
        }

        // Ownership is checked before history is read or the model is called.
        let history = match input.project_id {
            Some(project_id) => {
                ProjectRepo::find_by_id_for_user(&self.pool, project_id, user_id)
                    .await?
                    .ok_or(CoreError::ProjectNotFound {
                        project_id,
                        user_id,
                    })?;
                PromptRepo::list_for_project(&self.pool, project_id).await?
            }
            None => {
                // Early refusal saves a model call; the insert re-checks under lock.
                if ProjectRepo::count_for_user(&self.pool, user_id).await? >= MAX_PROJECTS_PER_USER {
                    return Err(CoreError::ProjectLimit {
                        user_id,
                        limit: MAX_PROJECTS_PER_USER,
                    }
                    .into());
                }
                Vec::new()
            }
        };

        let history_prompts: Vec<&str> = history.iter().map(|e| e.prompt.as_str()).collect();
        let prompt = build_prompt(self.profile, &input.prompt, &history_prompts);

        let started = Instant::now();
        let raw = self.generator.generate(&prompt).await?;
        tracing::info!(
            user_id,
            project_id = ?input.project_id,
            history_len = history.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            output_chars = raw.len(),
            "Model output received"
        );

        let artifacts = parse_page_output(self.profile, &raw)?;

        let project = match input.project_id {
            Some(project_id) => {
                let update = UpdateProjectCode {
                    react_code: artifacts.react.clone(),
                    html_code: artifacts.html.clone(),
                };
                ProjectRepo::update_code_for_user(&self.pool, project_id, user_id, &update)
                    .await?
                    .ok_or(CoreError::ProjectNotFound {
                        project_id,
                        user_id,
                    })?
            }
            None => {
                let create = CreateProject {
                    name: resolve_project_name(input.project_name.as_deref(), chrono::Utc::now()),
                    react_code: artifacts.react.clone(),
                    html_code: artifacts.html.clone(),
                };
                match ProjectRepo::create_with_limit(
                    &self.pool,
                    user_id,
                    &create,
                    MAX_PROJECTS_PER_USER,
                )
                .await?
                {
                    ProjectCreation::Created(project) => project,
                    ProjectCreation::LimitReached => {
                        return Err(CoreError::ProjectLimit {
                            user_id,
                            limit: MAX_PROJECTS_PER_USER,
                        }
                        .into());
                    }
                    ProjectCreation::OwnerMissing => {
                        return Err(CoreError::UserNotFound { user_id }.into());
                    }
                }
            }
        };

        PromptRepo::append(&self.pool, project.id, &input.prompt).await?;

        tracing::info!(
            user_id,
            project_id = project.id,
            created = input.project_id.is_none(),
            "Generation persisted"
        );

        Ok(GenerationResult {
            project_id: project.id,
            html: artifacts.html,
            react: artifacts.react,
        })
    }
}
