//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod extraction;
pub mod media;
pub mod minutes;
pub mod run;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use extraction::{ExtractionMode, ALL_MODES};
pub use media::{MediaMimeType, UploadedMedia};
pub use minutes::{section_title, MeetingMinutes, TranscriptRecord};
pub use run::{RunSession, RunState};
