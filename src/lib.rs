//! MinuteTaker - AI-powered meeting transcription and minutes CLI
//!
//! This crate provides the core functionality for transcribing uploaded
//! meeting recordings and distilling them into structured minutes (abstract
//! summary, key points, action items, sentiment) using the OpenAI API.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Whisper, chat completions, export, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
