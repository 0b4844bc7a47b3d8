//! Application configuration

pub mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_API_BASE, DEFAULT_CHAT_MODEL, DEFAULT_TRANSCRIPTION_MODEL,
};
