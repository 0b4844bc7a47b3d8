//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod assemble;
pub mod ports;
pub mod process;

// Re-export use cases
pub use assemble::MinutesAssembler;
pub use process::{
    FileSummary, ProcessCallbacks, ProcessError, ProcessFilesUseCase, ProcessInput, ProcessOutput,
};
