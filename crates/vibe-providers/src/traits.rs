//! LLM provider trait — the seam between tools and the completion service.

use async_trait::async_trait;
use vibe_core::types::{LlmResponse, Message};

use crate::error::CompletionResult;

/// A chat-completion backend.
///
/// `HttpProvider` talks to any OpenAI-compatible API; tests plug in stubs.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one chat completion request and wait for the reply.
    ///
    /// Makes exactly one call: no retries, no streaming.
    async fn chat(&self, messages: &[Message], model: &str) -> CompletionResult<LlmResponse>;

    /// The default model for this provider instance.
    fn default_model(&self) -> &str;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
