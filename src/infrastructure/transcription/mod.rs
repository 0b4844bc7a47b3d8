//! Speech-to-text adapter

pub mod whisper;

pub use whisper::WhisperTranscriber;
