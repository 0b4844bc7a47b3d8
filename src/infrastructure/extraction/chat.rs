//! Chat completion extractor adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ExtractionError, MinutesExtractor};
use crate::domain::config::{DEFAULT_API_BASE, DEFAULT_CHAT_MODEL};
use crate::domain::extraction::ExtractionMode;

// Request types for the chat completions endpoint

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Message {
    role: String,
    content: String,
}

// Response types for the chat completions endpoint

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// OpenAI-compatible chat completion extractor.
/// Sends the mode's fixed instruction as system guidance and the transcript
/// as user content; the generated text is returned as-is.
pub struct ChatExtractor {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl ChatExtractor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a specific chat model instead of the default.
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
        format!("{}/chat/completions", self.base_url)
    }

    /// Request body for one mode: instruction as system, transcript as user.
    fn build_request(&self, transcript: &str, mode: ExtractionMode) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            temperature: mode.temperature(),
            max_tokens: mode.max_tokens(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: mode.instruction().to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: transcript.to_string(),
                },
            ],
        }
    }

    /// Trimmed first-choice content, or `None` when the API sent nothing usable.
    fn extract_text(response: &ChatCompletionResponse) -> Option<String> {
        let text = response
            .choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()?
            .trim();

        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[async_trait]
impl MinutesExtractor for ChatExtractor {
    async fn extract(
        &self,
        transcript: &str,
        mode: ExtractionMode,
    ) -> Result<String, ExtractionError> {
        let url = self.api_url();
        let body = self.build_request(transcript, mode);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::RequestFailed(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => return Err(ExtractionError::InvalidApiKey),
            reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(ExtractionError::RateLimited),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ExtractionError::ApiError(format!(
                    "HTTP {}: {}",
                    status, body
                )));
            }
            _ => {}
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::ParseError(e.to_string()))?;

        // A 200 can still carry an error object instead of choices
        if let Some(error) = body.error {
            return Err(ExtractionError::ApiError(error.message));
        }

        Self::extract_text(&body).ok_or(ExtractionError::EmptyResponse)
    }
}
