//! Project entity model and DTOs.

use pagesmith_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub react_code: String,
    pub html_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight listing row: excludes the generated code payloads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new project for a user.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub react_code: String,
    pub html_code: String,
}

/// DTO for overwriting the generated code of an existing project.
#[derive(Debug, Clone)]
pub struct UpdateProjectCode {
    pub react_code: String,
    pub html_code: String,
}
