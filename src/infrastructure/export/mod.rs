//! Document export adapter

pub mod markdown;

pub use markdown::MarkdownExporter;
