/// Default OpenAI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4.1";
/// Default output token budget per generation.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8_000;
/// Default provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the LLM provider client.
#[derive(Clone)]
pub struct LlmConfig {
    /// Provider API key. Generation fails with [`LlmError::MissingApiKey`]
    /// while unset.
    ///
    /// [`LlmError::MissingApiKey`]: crate::LlmError::MissingApiKey
    pub api_key: Option<String>,
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default                     |
    /// |-------------------------|----------|-----------------------------|
    /// | `OPENAI_API_KEY`        | no       | --                          |
    /// | `OPENAI_BASE_URL`       | no       | `https://api.openai.com/v1` |
    /// | `LLM_MODEL`             | no       | `gpt-4.1`                   |
    /// | `LLM_MAX_OUTPUT_TOKENS` | no       | `8000`                      |
    /// | `LLM_TIMEOUT_SECS`      | no       | `120`                       |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable does not parse.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let max_output_tokens: u32 = std::env::var("LLM_MAX_OUTPUT_TOKENS")
            .unwrap_or_else(|_| DEFAULT_MAX_OUTPUT_TOKENS.to_string())
            .parse()
            .expect("LLM_MAX_OUTPUT_TOKENS must be a valid u32");

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            max_output_tokens,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let config = LlmConfig {
            api_key: Some("sk-live-123".to_string()),
            ..LlmConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-live-123"));
        assert!(rendered.contains("<redacted>"));
    }
}
