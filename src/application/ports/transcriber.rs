//! Speech-to-text port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::UploadedMedia;

/// Failures from the transcription backend.
///
/// Variants exist for message quality; callers treat them uniformly
/// and abort the run on the first one.
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("invalid API key")]
    InvalidApiKey,

    #[error("rate limited by the transcription API, try again later")]
    RateLimited,

    #[error("transcription returned no text")]
    EmptyResponse,

    #[error("transcription request failed: {0}")]
    RequestFailed(String),

    #[error("unreadable transcription response: {0}")]
    ParseError(String),

    #[error("transcription API error: {0}")]
    ApiError(String),
}

/// Converts an uploaded recording into transcript text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, media: &UploadedMedia) -> Result<String, TranscriptionError>;
}
