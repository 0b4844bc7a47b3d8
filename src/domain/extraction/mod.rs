//! Extraction mode value objects and fixed instruction templates

pub mod mode;

pub use mode::{ExtractionMode, ALL_MODES};
