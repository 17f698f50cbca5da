//! Repository for the append-only `prompts` table.
//!
//! No ownership checks happen here; callers must have authorized access to
//! the project first.

use pagesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::PromptEntry;

const COLUMNS: &str = "id, project_id, prompt, created_at";

/// Prompt history for projects.
pub struct PromptRepo;

impl PromptRepo {
    /// Append a prompt to a project's history with a server-assigned timestamp.
    pub async fn append(
        pool: &PgPool,
        project_id: DbId,
        prompt: &str,
    ) -> Result<PromptEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (project_id, prompt)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptEntry>(&query)
            .bind(project_id)
            .bind(prompt)
            .fetch_one(pool)
            .await
    }

    /// List a project's prompts, newest first. Ties on `created_at` fall
    /// back to insertion order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PromptEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PromptEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
