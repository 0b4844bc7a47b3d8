//! Persistent application settings

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Settings as stored on disk and merged across layers.
///
/// Every field is optional so partial sources (config file, environment,
/// CLI flags) can each contribute only what they actually set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub chat_model: Option<String>,
    pub transcription_model: Option<String>,
    pub api_base: Option<String>,
    pub export_path: Option<String>,
    pub file_summaries: Option<bool>,
}

impl AppConfig {
    /// The config written by `config init`: model and endpoint defaults
    /// filled in, no API key.
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            chat_model: Some(DEFAULT_CHAT_MODEL.to_string()),
            transcription_model: Some(DEFAULT_TRANSCRIPTION_MODEL.to_string()),
            api_base: Some(DEFAULT_API_BASE.to_string()),
            export_path: None,
            file_summaries: Some(false),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Layer `overlay` on top of `self`; set fields in `overlay` win.
    pub fn merge(self, overlay: Self) -> Self {
        Self {
            api_key: overlay.api_key.or(self.api_key),
            chat_model: overlay.chat_model.or(self.chat_model),
            transcription_model: overlay.transcription_model.or(self.transcription_model),
            api_base: overlay.api_base.or(self.api_base),
            export_path: overlay.export_path.or(self.export_path),
            file_summaries: overlay.file_summaries.or(self.file_summaries),
        }
    }

    pub fn chat_model_or_default(&self) -> &str {
        self.chat_model.as_deref().unwrap_or(DEFAULT_CHAT_MODEL)
    }

    pub fn transcription_model_or_default(&self) -> &str {
        self.transcription_model
            .as_deref()
            .unwrap_or(DEFAULT_TRANSCRIPTION_MODEL)
    }

    pub fn api_base_or_default(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn file_summaries_or_default(&self) -> bool {
        self.file_summaries.unwrap_or(false)
    }
}
