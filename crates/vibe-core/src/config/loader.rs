//! Config loader — reads `~/.vibe/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.vibe/config.json` (or an explicit path)
//! 3. Environment variables `VIBE_<SECTION>__<FIELD>` (override JSON)
//! 4. `OPENAI_API_KEY`, only when no key was configured by 2 or 3

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Credential variable honoured when no key is configured explicitly.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from `path` (or the default path) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    let config = load_config_from_path(&config_path);
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment overrides, reading variables through `lookup`.
///
/// Supported overrides:
/// - `VIBE_PROVIDER__API_KEY` → `provider.api_key`
/// - `VIBE_PROVIDER__API_BASE` → `provider.api_base`
/// - `VIBE_PROVIDER__MODEL` → `provider.model`
/// - `VIBE_STATE__PATH` → `state.path`
/// - `OPENAI_API_KEY` → `provider.api_key` (only if still empty)
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("VIBE_PROVIDER__API_KEY") {
        config.provider.api_key = val;
    }
    if let Some(val) = lookup("VIBE_PROVIDER__API_BASE") {
        config.provider.api_base = Some(val);
    }
    if let Some(val) = lookup("VIBE_PROVIDER__MODEL") {
        config.provider.model = val;
    }
    if let Some(val) = lookup("VIBE_STATE__PATH") {
        config.state.path = val;
    }

    if !config.provider.is_configured() {
        if let Some(val) = lookup(OPENAI_API_KEY_ENV).filter(|v| !v.is_empty()) {
            debug!("Using credential from {}", OPENAI_API_KEY_ENV);
            config.provider.api_key = val;
        }
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
