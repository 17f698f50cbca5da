//! OpenAI Responses API client.
//!
//! Wraps `POST {base_url}/responses` using [`reqwest`], asking for a JSON
//! object response bounded by the configured token budget.

use std::time::Duration;

use async_trait::async_trait;
use pagesmith_core::prompt_builder::PromptPair;
use serde::Deserialize;
use serde_json::json;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::PageGenerator;

/// HTTP client for the OpenAI Responses API.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

/// Subset of the Responses API payload needed to recover output text.
#[derive(Debug, Deserialize)]
struct ResponsesEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl OpenAiClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn request_body(&self, prompt: &PromptPair) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "instructions": prompt.instructions,
            "input": [
                { "role": "user", "content": prompt.input }
            ],
            "max_output_tokens": self.config.max_output_tokens,
            "text": { "format": { "type": "json_object" } },
        })
    }

    /// Ensure the response has a success status code, capturing the body
    /// text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PageGenerator for OpenAiClient {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey)?;

        tracing::debug!(
            model = %self.config.model,
            max_output_tokens = self.config.max_output_tokens,
            input_chars = prompt.input.len(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(format!("{}/responses", self.config.base_url))
            .bearer_auth(api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let body = Self::ensure_success(response).await?.text().await?;
        extract_output_text(&body)
    }
}

/// Concatenate every `output_text` part of the message items in a
/// Responses API body.
fn extract_output_text(body: &str) -> Result<String, LlmError> {
    let envelope: ResponsesEnvelope =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    if let Some(status) = envelope.status.as_deref().filter(|s| *s != "completed") {
        tracing::warn!(status, "Generation response did not complete");
    }

    let text: String = envelope
        .output
        .iter()
        .filter(|item| item.kind == "message")
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return Err(LlmError::EmptyOutput);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> PromptPair {
        PromptPair {
            instructions: "Return JSON".to_string(),
            input: "coffee shop".to_string(),
        }
    }

    #[test]
    fn request_body_carries_model_budget_and_json_format() {
        let client = OpenAiClient::new(LlmConfig::default()).unwrap();
        let body = client.request_body(&prompt());

        assert_eq!(body["model"], "gpt-4.1");
        assert_eq!(body["max_output_tokens"], 8000);
        assert_eq!(body["instructions"], "Return JSON");
        assert_eq!(body["input"][0]["role"], "user");
        assert_eq!(body["input"][0]["content"], "coffee shop");
        assert_eq!(body["text"]["format"]["type"], "json_object");
    }

    #[test]
    fn output_text_parts_are_concatenated() {
        let body = r#"{
            "status": "completed",
            "output": [
                {"type": "reasoning", "content": []},
                {"type": "message", "content": [
                    {"type": "output_text", "text": "{\"a\":"},
                    {"type": "output_text", "text": "\"b\"}"}
                ]}
            ]
        }"#;
        assert_eq!(extract_output_text(body).unwrap(), r#"{"a":"b"}"#);
    }

    #[test]
    fn refusal_only_output_is_empty() {
        let body = r#"{"output":[{"type":"message","content":[{"type":"refusal","refusal":"no"}]}]}"#;
        assert!(matches!(extract_output_text(body), Err(LlmError::EmptyOutput)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            extract_output_text("<html>bad gateway</html>"),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_request() {
        let client = OpenAiClient::new(LlmConfig::default()).unwrap();
        let result = client.generate(&prompt()).await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }
}
