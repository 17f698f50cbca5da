//! Repository for the `projects` table.
//!
//! Every query is scoped by the owning user, so a project belonging to
//! someone else looks exactly like a missing one.

use pagesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectSummary, UpdateProjectCode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, react_code, html_code, created_at, updated_at";

/// Result of [`ProjectRepo::create_with_limit`].
#[derive(Debug)]
pub enum ProjectCreation {
    Created(Project),
    /// The owner already has `limit` projects; nothing was inserted.
    LimitReached,
    /// The owning user row does not exist; nothing was inserted.
    OwnerMissing,
}

impl ProjectCreation {
    /// The inserted project, if any.
    pub fn created(self) -> Option<Project> {
        match self {
            ProjectCreation::Created(project) => Some(project),
            _ => None,
        }
    }
}

/// Provides ownership-scoped CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Number of projects currently owned by a user.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert a project unless the user already owns `limit` or more.
    ///
    /// Locks the owning user row for the duration of the transaction so
    /// concurrent creations for the same user are serialized between the
    /// count and the insert.
    ///
    /// Inserts nothing when the limit is reached or the user does not exist.
    pub async fn create_with_limit(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
        limit: i64,
    ) -> Result<ProjectCreation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let owner: Option<(DbId,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if owner.is_none() {
            return Ok(ProjectCreation::OwnerMissing);
        }

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;
        if count >= limit {
            tracing::debug!(user_id, count, limit, "Project limit reached");
            return Ok(ProjectCreation::LimitReached);
        }

        let query = format!(
            "INSERT INTO projects (user_id, name, react_code, html_code)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.react_code)
            .bind(&input.html_code)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ProjectCreation::Created(project))
    }

    /// Find a project by ID, only if owned by `user_id`.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite both generated code fields of an owned project.
    ///
    /// Returns `None` if the project does not exist or belongs to another user.
    pub async fn update_code_for_user(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
        input: &UpdateProjectCode,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                react_code = $3,
                html_code = $4,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(&input.react_code)
            .bind(&input.html_code)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an owned project. Its prompts cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List `{id, name}` for a user's projects, most recently created first.
    pub async fn list_light_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT id, name FROM projects
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
