//! Run session state machine

use std::fmt;
use thiserror::Error;

/// Run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Idle,
    Uploading,
    Processing,
    Done,
    Error,
}

impl RunState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::Done => "done",
            Self::Error => "error",
        }
    }

    /// Whether the run has finished, successfully or not
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: RunState,
    pub action: String,
}

/// Run session entity.
/// Drives one end-to-end invocation through explicit states instead of
/// implicit rerun-on-interaction semantics.
///
/// State machine:
///   IDLE -> UPLOADING (begin_upload)
///   UPLOADING -> PROCESSING (begin_processing)
///   PROCESSING -> DONE (complete)
///   UPLOADING | PROCESSING -> ERROR (fail)
///   DONE | ERROR -> IDLE (reset)
#[derive(Debug, Default)]
pub struct RunSession {
    state: RunState,
}

impl RunSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Transition from IDLE to UPLOADING
    pub fn begin_upload(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RunState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "begin upload".to_string(),
            });
        }
        self.state = RunState::Uploading;
        Ok(())
    }

    /// Transition from UPLOADING to PROCESSING
    pub fn begin_processing(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RunState::Uploading {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "begin processing".to_string(),
            });
        }
        self.state = RunState::Processing;
        Ok(())
    }

    /// Transition from PROCESSING to DONE
    pub fn complete(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RunState::Processing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "complete".to_string(),
            });
        }
        self.state = RunState::Done;
        Ok(())
    }

    /// Transition from UPLOADING or PROCESSING to ERROR
    pub fn fail(&mut self) -> Result<(), InvalidStateTransition> {
        if !matches!(self.state, RunState::Uploading | RunState::Processing) {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "fail".to_string(),
            });
        }
        self.state = RunState::Error;
        Ok(())
    }

    /// Transition from a terminal state back to IDLE so the session can be
    /// reused for a subsequent attempt
    pub fn reset(&mut self) -> Result<(), InvalidStateTransition> {
        if !self.state.is_terminal() {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "reset".to_string(),
            });
        }
        self.state = RunState::Idle;
        Ok(())
    }
}
