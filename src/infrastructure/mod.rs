//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the OpenAI API.

pub mod config;
pub mod export;
pub mod extraction;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use export::MarkdownExporter;
pub use extraction::ChatExtractor;
pub use transcription::WhisperTranscriber;
