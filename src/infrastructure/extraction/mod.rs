//! Text extraction adapter

pub mod chat;

pub use chat::ChatExtractor;
