//! Per-file transcript value object

/// Transcript produced for one uploaded file.
/// Pairs the source filename with the text the transcription service
/// returned; not retained beyond the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    filename: String,
    text: String,
}

impl TranscriptRecord {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Source filename the transcript was produced from
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The transcript text
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_filename_and_text() {
        let record = TranscriptRecord::new("standup.mp3", "we shipped it");
        assert_eq!(record.filename(), "standup.mp3");
        assert_eq!(record.text(), "we shipped it");
    }
}
