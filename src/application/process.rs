//! Multi-file processing use case

use thiserror::Error;

use crate::domain::extraction::ExtractionMode;
use crate::domain::media::UploadedMedia;
use crate::domain::minutes::{MeetingMinutes, TranscriptRecord};

use super::assemble::MinutesAssembler;
use super::ports::{ExtractionError, MinutesExtractor, Transcriber, TranscriptionError};

/// Errors from the process use case
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Input parameters for the process use case
#[derive(Debug, Clone, Default)]
pub struct ProcessInput {
    /// Uploaded files, in upload order
    pub files: Vec<UploadedMedia>,
    /// Produce an abstract summary per file in addition to the aggregate
    pub per_file_summaries: bool,
}

/// Abstract summary produced for a single file (opt-in)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub filename: String,
    pub summary: String,
}

/// Output from the process use case
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Per-file transcripts, in upload order
    pub transcripts: Vec<TranscriptRecord>,
    /// Minutes assembled over the combined transcript
    pub minutes: MeetingMinutes,
    /// Per-file summaries (empty unless enabled)
    pub file_summaries: Vec<FileSummary>,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct ProcessCallbacks {
    /// Called before a file's transcription starts, with its filename
    pub on_file_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called as soon as a file's transcript is available
    pub on_transcript: Option<Box<dyn Fn(&TranscriptRecord) + Send + Sync>>,
    /// Called when a per-file summary is available (filename, summary)
    pub on_file_summary: Option<Box<dyn Fn(&str, &str) + Send + Sync>>,
    /// Called when aggregate assembly starts
    pub on_assembly_start: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Multi-file orchestration use case.
///
/// Transcribes the uploaded files strictly sequentially in upload order,
/// appends each transcript to a running accumulator with no separator
/// between files, then assembles minutes once over the combined text.
/// Any failure aborts the entire run (no skip-and-continue).
pub struct ProcessFilesUseCase<T, E>
where
    T: Transcriber,
    E: MinutesExtractor,
{
    transcriber: T,
    assembler: MinutesAssembler<E>,
}

impl<T, E> ProcessFilesUseCase<T, E>
where
    T: Transcriber,
    E: MinutesExtractor,
{
    /// Create a new use case instance
    pub fn new(transcriber: T, extractor: E) -> Self {
        Self {
            transcriber,
            assembler: MinutesAssembler::new(extractor),
        }
    }

    /// Execute the processing workflow
    pub async fn execute(
        &self,
        input: ProcessInput,
        callbacks: ProcessCallbacks,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut combined_transcript = String::new();
        let mut transcripts = Vec::with_capacity(input.files.len());
        let mut file_summaries = Vec::new();

        for file in &input.files {
            if let Some(ref cb) = callbacks.on_file_start {
                cb(file.filename());
            }

            let text = self.transcriber.transcribe(file).await?;
            let record = TranscriptRecord::new(file.filename(), text);

            if let Some(ref cb) = callbacks.on_transcript {
                cb(&record);
            }

            if input.per_file_summaries {
                let summary = self
                    .assembler
                    .extractor()
                    .extract(record.text(), ExtractionMode::Summary)
                    .await?;

                if let Some(ref cb) = callbacks.on_file_summary {
                    cb(record.filename(), &summary);
                }

                file_summaries.push(FileSummary {
                    filename: record.filename().to_string(),
                    summary,
                });
            }

            // Bare concatenation, no separator between files
            combined_transcript.push_str(record.text());
            transcripts.push(record);
        }

        if let Some(ref cb) = callbacks.on_assembly_start {
            cb();
        }

        let minutes = self.assembler.summarize(&combined_transcript).await?;

        Ok(ProcessOutput {
            transcripts,
            minutes,
            file_summaries,
        })
    }
}
