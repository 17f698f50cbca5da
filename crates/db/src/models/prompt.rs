//! Prompt history entry model.

use pagesmith_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptEntry {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub project_id: DbId,
    pub prompt: String,
    pub created_at: Timestamp,
}
