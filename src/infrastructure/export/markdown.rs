//! Markdown document exporter adapter

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{ExportError, MinutesExporter};
use crate::domain::minutes::{section_title, MeetingMinutes};

/// Markdown exporter.
/// Writes the four sections in fixed order, each as a level-1 heading
/// followed by the section text and a blank separator line. The destination
/// is overwritten unconditionally.
#[derive(Debug, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the minutes document as a string
    fn render(minutes: &MeetingMinutes) -> String {
        let mut document = String::new();
        for (field_name, text) in minutes.sections() {
            document.push_str(&format!("# {}\n\n{}\n\n", section_title(field_name), text));
        }
        document
    }
}

#[async_trait]
impl MinutesExporter for MarkdownExporter {
    async fn export(
        &self,
        minutes: &MeetingMinutes,
        destination: &Path,
    ) -> Result<(), ExportError> {
        let document = Self::render(minutes);

        fs::write(destination, document)
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))
    }
}
