#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pagesmith_api::config::ServerConfig;
use pagesmith_api::router::build_app_router;
use pagesmith_api::state::AppState;
use pagesmith_core::page_output::OutputProfile;
use pagesmith_core::prompt_builder::PromptPair;
use pagesmith_llm::{LlmConfig, LlmError, PageGenerator};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Scripted LLM backend
// ---------------------------------------------------------------------------

/// In-process [`PageGenerator`] that replays queued replies and records
/// every prompt it receives. Replies with `EmptyOutput` once the queue is
/// drained.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<PromptPair>>,
}

impl ScriptedGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_replies<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::default();
        generator
            .replies
            .lock()
            .unwrap()
            .extend(replies.into_iter().map(|r| Ok(r.into())));
        Arc::new(generator)
    }

    pub fn push_error(&self, err: LlmError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<PromptPair> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PageGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(prompt.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyOutput))
    }
}

/// A well-formed React-profile model reply.
pub fn react_reply(html: &str, react: &str) -> String {
    serde_json::json!({ "previewHtml": html, "reactComponent": react }).to_string()
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        generation_profile: OutputProfile::React,
        llm: LlmConfig::default(),
    }
}

pub fn test_state(pool: PgPool, generator: Arc<ScriptedGenerator>) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
        generator,
    }
}

/// Build the full application router, middleware included, backed by the
/// given pool and scripted generator.
pub fn build_test_app(pool: PgPool, generator: Arc<ScriptedGenerator>) -> Router {
    let config = test_config();
    build_app_router(test_state(pool, generator), &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::DELETE, uri, body).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user directly and return its id.
pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let row: (i64,) = sqlx::query_as("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind("Test User")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

pub async fn project_count(pool: &PgPool, user_id: i64) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

pub async fn prompt_count(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prompts")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
