//! Document export port

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::minutes::MeetingMinutes;

#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("could not write document: {0}")]
    WriteFailed(String),
}

/// Serializes assembled minutes into a shareable document file.
#[async_trait]
pub trait MinutesExporter: Send + Sync {
    /// Write the minutes to the destination, replacing any existing file.
    async fn export(&self, minutes: &MeetingMinutes, destination: &Path)
        -> Result<(), ExportError>;
}
