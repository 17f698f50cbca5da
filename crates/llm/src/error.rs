/// Errors from the LLM provider layer.
///
/// All variants surface to API callers as a generic upstream failure; the
/// details are for server logs.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// No API key is configured for the provider.
    #[error("LLM provider API key is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code (including rate limits).
    #[error("LLM provider error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the expected envelope.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The provider answered but produced no text.
    #[error("LLM provider returned no output text")]
    EmptyOutput,
}
