//! `summarize` tool — one completion call, with an offline fallback.
//!
//! The primary path asks the completion service for a summary. When that is
//! not possible (no credential, rate limit, any transport failure, or an empty
//! reply) the summary degrades to the first sentence of the input.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use vibe_core::config::ProviderConfig;
use vibe_core::types::Message;
use vibe_providers::{create_provider, CompletionError, CompletionResult, LlmProvider};

use super::base::{Tool, ToolOutput};

/// System instruction sent ahead of the text.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Offline summary: everything before the first period, plus a period.
///
/// Input without a period is returned whole with a period appended, so
/// `""` becomes `"."`.
pub fn degraded_summary(text: &str) -> String {
    let head = text.find('.').map_or(text, |idx| &text[..idx]);
    format!("{head}.")
}

// ─────────────────────────────────────────────
// Summarizer
// ─────────────────────────────────────────────

/// Summarizes text through an optional completion provider.
pub struct Summarizer {
    provider: Option<Arc<dyn LlmProvider>>,
    model: String,
}

impl Summarizer {
    /// Summarizer backed by `provider`, using its default model.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_string();
        Self {
            provider: Some(provider),
            model,
        }
    }

    /// Summarizer with no provider; always takes the degraded path.
    pub fn offline() -> Self {
        Self {
            provider: None,
            model: String::new(),
        }
    }

    /// Build from config. A missing credential yields an offline summarizer.
    pub fn from_config(config: &ProviderConfig) -> Self {
        match create_provider(config) {
            Ok(provider) => Self::new(Arc::new(provider)),
            Err(e) => {
                debug!(reason = e.kind(), "summarizer running offline");
                Self::offline()
            }
        }
    }

    /// Whether a provider is attached.
    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    /// Primary path: one chat completion call.
    pub async fn complete(&self, text: &str) -> CompletionResult<String> {
        let provider = self.provider.as_ref().ok_or(CompletionError::NoCredential)?;

        let messages = [Message::system(SYSTEM_INSTRUCTION), Message::user(text)];
        let response = provider.chat(&messages, &self.model).await?;

        response
            .content
            .ok_or_else(|| CompletionError::Transport("reply had no content".to_string()))
    }

    /// Summarize `text`. Never fails: any [`CompletionError`] falls back to
    /// [`degraded_summary`].
    pub async fn summarize_text(&self, text: &str) -> String {
        match self.complete(text).await {
            Ok(summary) => summary,
            Err(CompletionError::NoCredential) => {
                debug!("no credential configured, using stub summary");
                degraded_summary(text)
            }
            Err(CompletionError::RateLimited(detail)) => {
                warn!(detail = %detail, "AI quota exceeded, using stub summary");
                degraded_summary(text)
            }
            Err(e @ CompletionError::Transport(_)) => {
                warn!(error = %e, "completion call failed, using stub summary");
                degraded_summary(text)
            }
        }
    }
}

#[async_trait]
impl Tool for Summarizer {
    fn name(&self) -> &str {
        "summarize"
    }

    fn description(&self) -> &str {
        "Summarize input text into a short summary"
    }

    fn inputs(&self) -> Vec<String> {
        vec!["text".into()]
    }

    fn outputs(&self) -> Vec<String> {
        vec!["summary".into()]
    }

    async fn execute(&self, text: &str) -> anyhow::Result<ToolOutput> {
        Ok(ToolOutput::Text(self.summarize_text(text).await))
    }
}
