//! Run session state machine

pub mod session;

pub use session::{InvalidStateTransition, RunSession, RunState};
