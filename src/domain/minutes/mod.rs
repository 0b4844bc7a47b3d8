//! Meeting minutes and transcript value objects

pub mod meeting_minutes;
pub mod transcript_record;

pub use meeting_minutes::{section_title, MeetingMinutes, FIELD_NAMES};
pub use transcript_record::TranscriptRecord;
