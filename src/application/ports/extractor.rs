//! Transcript extraction port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::extraction::ExtractionMode;

/// Failures from the chat completion backend.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("invalid API key")]
    InvalidApiKey,

    #[error("rate limit or quota exceeded on the chat API, try again later")]
    RateLimited,

    #[error("completion returned no content")]
    EmptyResponse,

    #[error("extraction request failed: {0}")]
    RequestFailed(String),

    #[error("unreadable completion response: {0}")]
    ParseError(String),

    #[error("chat API error: {0}")]
    ApiError(String),
}

/// Runs one fixed instruction template over a transcript.
///
/// The generated text is taken as-is, no schema validation.
#[async_trait]
pub trait MinutesExtractor: Send + Sync {
    async fn extract(
        &self,
        transcript: &str,
        mode: ExtractionMode,
    ) -> Result<String, ExtractionError>;
}
