//! Text-completion provider layer for Vibe.
//!
//! - [`traits::LlmProvider`] — trait that all providers implement
//! - [`http_provider::HttpProvider`] — OpenAI-compatible HTTP client
//! - [`error::CompletionError`] — the closed set of ways a call can fail

pub mod error;
pub mod http_provider;
pub mod traits;

pub use error::{CompletionError, CompletionResult};
pub use http_provider::{create_provider, HttpProvider};
pub use traits::LlmProvider;
