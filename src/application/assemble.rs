//! Meeting minutes assembly use case

use crate::domain::extraction::ExtractionMode;
use crate::domain::minutes::MeetingMinutes;

use super::ports::{ExtractionError, MinutesExtractor};

/// Assembles meeting minutes from a transcript.
///
/// Issues exactly four extraction calls, one per mode, sequentially, over the
/// same transcript text. All-or-nothing: if any call fails, no minutes are
/// produced (no partial record with some fields populated).
pub struct MinutesAssembler<E>
where
    E: MinutesExtractor,
{
    extractor: E,
}

impl<E> MinutesAssembler<E>
where
    E: MinutesExtractor,
{
    /// Create a new assembler around an extractor
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Access the underlying extractor
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Produce meeting minutes for the transcript.
    ///
    /// Empty transcripts are not guarded: the extraction calls are still
    /// issued with empty user content.
    pub async fn summarize(&self, transcript: &str) -> Result<MeetingMinutes, ExtractionError> {
        let abstract_summary = self
            .extractor
            .extract(transcript, ExtractionMode::Summary)
            .await?;
        let key_points = self
            .extractor
            .extract(transcript, ExtractionMode::KeyPoints)
            .await?;
        let action_items = self
            .extractor
            .extract(transcript, ExtractionMode::ActionItems)
            .await?;
        let sentiment = self
            .extractor
            .extract(transcript, ExtractionMode::Sentiment)
            .await?;

        Ok(MeetingMinutes::new(
            abstract_summary,
            key_points,
            action_items,
            sentiment,
        ))
    }
}
