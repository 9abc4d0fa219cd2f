//! Typed failures of a completion call.

use thiserror::Error;

/// Result alias for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Why a completion call did not produce a reply.
///
/// Callers that can degrade (the summarizer) match on this instead of
/// swallowing arbitrary errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// No API key configured; the service was never contacted.
    #[error("no API credential configured")]
    NoCredential,

    /// The service answered HTTP 429.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Network failure, non-success status, or an undecodable reply.
    #[error("completion call failed: {0}")]
    Transport(String),
}

impl CompletionError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::NoCredential => "no_credential",
            CompletionError::RateLimited(_) => "rate_limited",
            CompletionError::Transport(_) => "transport",
        }
    }
}
