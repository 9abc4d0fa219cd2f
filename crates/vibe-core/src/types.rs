//! Wire types for the OpenAI-style chat completions API.
//!
//! The summarizer only ever sends a system instruction plus one user message
//! and reads back a single textual reply, so this module carries just the
//! subset of the format needed for that exchange.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────

/// A chat message, tagged by its `role` field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role")]
pub enum Message {
    #[serde(rename = "system")]
    System { content: String },

    #[serde(rename = "user")]
    User { content: String },

    #[serde(rename = "assistant")]
    Assistant {
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    /// Create an assistant message with text content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: Some(content.into()),
        }
    }
}

// ─────────────────────────────────────────────
// Request / response bodies
// ─────────────────────────────────────────────

/// Body posted to `{api_base}/chat/completions`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// Raw chat completion response. Used internally for deserialization.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<UsageInfo>,
}

/// A single choice in a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

/// The assistant message within a choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

/// Token usage statistics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UsageInfo {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// ─────────────────────────────────────────────
// LlmResponse
// ─────────────────────────────────────────────

/// Provider-neutral reply from a completion call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LlmResponse {
    /// Text of the first choice, if the model produced any.
    pub content: Option<String>,
    /// Why the model stopped generating.
    pub finish_reason: Option<String>,
    /// Token usage, when the API reports it.
    pub usage: Option<UsageInfo>,
}

impl LlmResponse {
    /// A response carrying only text.
    pub fn text(content: impl Into<String>) -> Self {
        LlmResponse {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

impl From<ChatCompletionResponse> for LlmResponse {
    fn from(resp: ChatCompletionResponse) -> Self {
        let usage = resp.usage;
        match resp.choices.into_iter().next() {
            Some(choice) => LlmResponse {
                content: choice.message.content,
                finish_reason: choice.finish_reason,
                usage,
            },
            None => LlmResponse {
                usage,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_serializes_role_tag() {
        let value = serde_json::to_value(Message::system("You are a helpful assistant.")).unwrap();
        assert_eq!(
            value,
            json!({"role": "system", "content": "You are a helpful assistant."})
        );

        let value = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_assistant_without_content_omits_field() {
        let value = serde_json::to_value(Message::Assistant { content: None }).unwrap();
        assert_eq!(value, json!({"role": "assistant"}));
    }

    #[test]
    fn test_request_body_shape() {
        let req = ChatCompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![Message::system("sys"), Message::user("text")],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "text");
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn test_response_into_llm_response() {
        let raw: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "message": { "content": "First." }, "finish_reason": "stop" },
                { "message": { "content": "Second." }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5 }
        }))
        .unwrap();

        let resp: LlmResponse = raw.into();
        assert_eq!(resp.content.as_deref(), Some("First."));
        assert_eq!(resp.finish_reason.as_deref(), Some("stop"));
        assert_eq!(resp.usage.unwrap().total_tokens, 5);
    }

    #[test]
    fn test_response_without_choices() {
        let raw: ChatCompletionResponse =
            serde_json::from_value(json!({ "id": null, "usage": null })).unwrap();
        let resp: LlmResponse = raw.into();
        assert!(resp.content.is_none());
        assert!(resp.finish_reason.is_none());
    }
}
