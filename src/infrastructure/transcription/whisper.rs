//! Whisper API transcriber adapter

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::config::{DEFAULT_API_BASE, DEFAULT_TRANSCRIPTION_MODEL};
use crate::domain::media::UploadedMedia;

// Response types for the transcriptions endpoint

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// OpenAI-compatible speech-to-text transcriber.
/// Uploads the raw media bytes as a multipart form to `/audio/transcriptions`.
pub struct WhisperTranscriber {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl WhisperTranscriber {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a specific speech-to-text model instead of the default.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::new(api_key)
        }
    }

    /// Override the API base URL (testing, OpenAI-compatible gateways)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }

    /// Assemble the multipart upload: the media bytes plus the model name.
    fn build_form(&self, media: &UploadedMedia) -> Result<Form, TranscriptionError> {
        let file_part = Part::bytes(media.data().to_vec())
            .file_name(media.filename().to_string())
            .mime_str(media.mime_type().as_str())
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        Ok(Form::new()
            .part("file", file_part)
            .text("model", self.model.clone()))
    }

    /// Trimmed transcript text, or `None` when the API sent nothing usable.
    fn extract_text(response: &TranscriptionResponse) -> Option<String> {
        let text = response.text.as_deref()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, media: &UploadedMedia) -> Result<String, TranscriptionError> {
        let url = self.api_url();
        let form = self.build_form(media)?;

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => return Err(TranscriptionError::InvalidApiKey),
            reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(TranscriptionError::RateLimited),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(TranscriptionError::ApiError(format!(
                    "HTTP {}: {}",
                    status, body
                )));
            }
            _ => {}
        }

        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        // A 200 can still carry an error object instead of text
        if let Some(error) = body.error {
            return Err(TranscriptionError::ApiError(error.message));
        }

        Self::extract_text(&body).ok_or(TranscriptionError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_points_at_transcriptions_endpoint() {
        let transcriber = WhisperTranscriber::new("test-key");
        assert_eq!(
            transcriber.api_url(),
            "https://api.openai.com/v1/audio/transcriptions"
        );
    }

    #[test]
    fn custom_base_url_trims_trailing_slash() {
        let transcriber =
            WhisperTranscriber::new("key").with_base_url("http://localhost:9000/v1/");
        assert_eq!(
            transcriber.api_url(),
            "http://localhost:9000/v1/audio/transcriptions"
        );
    }

    #[test]
    fn with_model_overrides_default() {
        let transcriber = WhisperTranscriber::with_model("key", "gpt-4o-transcribe");
        assert_eq!(transcriber.model, "gpt-4o-transcribe");
    }

    #[test]
    fn default_model_is_whisper() {
        let transcriber = WhisperTranscriber::new("key");
        assert_eq!(transcriber.model, "whisper-1");
    }

    #[test]
    fn build_form_accepts_media() {
        let transcriber = WhisperTranscriber::new("key");
        let media = UploadedMedia::new("standup.mp3", vec![1, 2, 3]);
        assert!(transcriber.build_form(&media).is_ok());
    }

    #[test]
    fn extract_text_trims_whitespace() {
        let response = TranscriptionResponse {
            text: Some("  Hello world  ".to_string()),
            error: None,
        };
        assert_eq!(
            WhisperTranscriber::extract_text(&response),
            Some("Hello world".to_string())
        );
    }

    #[test]
    fn blank_or_missing_text_yields_none() {
        let response = TranscriptionResponse {
            text: Some("   ".to_string()),
            error: None,
        };
        assert!(WhisperTranscriber::extract_text(&response).is_none());

        let response = TranscriptionResponse {
            text: None,
            error: None,
        };
        assert!(WhisperTranscriber::extract_text(&response).is_none());
    }
}
