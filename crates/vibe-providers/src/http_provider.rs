//! HTTP provider for OpenAI-compatible chat completion APIs.
//!
//! Posts `{"model", "messages"}` to `{api_base}/chat/completions` with bearer
//! auth and maps every failure onto [`CompletionError`].

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error};

use vibe_core::config::ProviderConfig;
use vibe_core::types::{ChatCompletionRequest, ChatCompletionResponse, LlmResponse, Message};

use crate::error::{CompletionError, CompletionResult};
use crate::traits::LlmProvider;

const DISPLAY_NAME: &str = "OpenAI-compatible";

// ─────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────

/// Client for one OpenAI-compatible endpoint.
pub struct HttpProvider {
    /// HTTP client (connection-pooled). No request timeout is set.
    client: reqwest::Client,
    /// API base URL (e.g. `"https://api.openai.com/v1"`).
    api_base: String,
    /// API key for Bearer authentication.
    api_key: String,
    /// Model used when callers don't pick one.
    default_model: String,
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("api_base", &self.api_base)
            .field("default_model", &self.default_model)
            .finish()
    }
}

impl HttpProvider {
    /// Create a provider from config. Does not check the key; see [`create_provider`].
    pub fn new(config: &ProviderConfig) -> Self {
        HttpProvider {
            client: reqwest::Client::new(),
            api_base: config.api_base_or_default().to_string(),
            api_key: config.api_key.clone(),
            default_model: config.model.clone(),
        }
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/chat/completions", base)
    }
}

#[async_trait]
impl LlmProvider for HttpProvider {
    async fn chat(&self, messages: &[Message], model: &str) -> CompletionResult<LlmResponse> {
        debug!(model = %model, messages = messages.len(), "Calling LLM");

        let request_body = ChatCompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                CompletionError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(status = %status, body = %body, "API error");

            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                CompletionError::RateLimited(body)
            } else {
                CompletionError::Transport(format!("{} — {}", status, body))
            });
        }

        let parsed = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!(error = %e, "Failed to parse LLM response");
            CompletionError::Transport(format!("invalid response body: {}", e))
        })?;

        let llm_resp: LlmResponse = parsed.into();
        debug!(
            has_content = llm_resp.content.is_some(),
            finish_reason = llm_resp.finish_reason.as_deref().unwrap_or("?"),
            "LLM response received"
        );
        Ok(llm_resp)
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }
}

// ─────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────

/// Build an `HttpProvider` from config.
///
/// Returns [`CompletionError::NoCredential`] when no API key is configured,
/// so callers can go straight to their fallback without touching the network.
pub fn create_provider(config: &ProviderConfig) -> CompletionResult<HttpProvider> {
    if !config.is_configured() {
        return Err(CompletionError::NoCredential);
    }

    debug!(
        model = %config.model,
        api_base = config.api_base_or_default(),
        "Creating LLM provider"
    );

    Ok(HttpProvider::new(config))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
