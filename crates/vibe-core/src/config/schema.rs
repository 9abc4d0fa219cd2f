//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

/// Default chat model for the summarizer.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default OpenAI-compatible API base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "agent_state.json";

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.vibe/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub state: StateConfig,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

/// Connection settings for the text-completion service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// API key for bearer authentication. Empty means "not configured".
    pub api_key: String,
    /// Custom API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Chat model identifier.
    pub model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Configured API base, or the OpenAI default.
    pub fn api_base_or_default(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }
}

// ─────────────────────────────────────────────
// State
// ─────────────────────────────────────────────

/// Where the persisted state file lives.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateConfig {
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STATE_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider.model, "gpt-3.5-turbo");
        assert!(!config.provider.is_configured());
        assert_eq!(config.provider.api_base_or_default(), "https://api.openai.com/v1");
        assert_eq!(config.state.path, "agent_state.json");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"provider": {"apiKey": "sk-test"}}"#).unwrap();
        assert!(config.provider.is_configured());
        assert_eq!(config.provider.model, DEFAULT_MODEL);
        assert_eq!(config.state.path, DEFAULT_STATE_FILE);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut config = Config::default();
        config.provider.api_base = Some("http://localhost:8000/v1".into());
        let raw = serde_json::to_value(&config).unwrap();
        assert!(raw["provider"].get("apiKey").is_some());
        assert!(raw["provider"].get("apiBase").is_some());
        assert!(raw["provider"].get("api_key").is_none());
    }
}
