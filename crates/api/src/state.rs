use std::sync::Arc;

use pagesmith_llm::PageGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pagesmith_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// LLM backend used by the generation engine.
    pub generator: Arc<dyn PageGenerator>,
}
