//! LLM provider adapter for page generation.
//!
//! The orchestrator depends only on the [`PageGenerator`] trait ("given a
//! prompt, return text"); [`openai::OpenAiClient`] is the production
//! implementation.

pub mod config;
pub mod error;
pub mod openai;

use async_trait::async_trait;
use pagesmith_core::prompt_builder::PromptPair;

pub use config::LlmConfig;
pub use error::LlmError;
pub use openai::OpenAiClient;

/// A text-generation backend.
///
/// Implementations send the instruction/message pair to a model and return
/// its raw output text unmodified. No retries are performed.
#[async_trait]
pub trait PageGenerator: Send + Sync {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, LlmError>;
}
