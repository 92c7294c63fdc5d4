//! Session error types.
//!
//! Driving a session past its end, or rebuilding one from a snapshot that
//! no longer matches the bank, is a caller-contract violation. Both surface
//! as explicit errors so the boundary layer can decide what to do, instead
//! of the session silently no-opping.

use thiserror::Error;

/// Errors produced by the interview session state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Every question has been answered; there is no current question to
    /// serve or to answer.
    #[error("interview already finished after {answered} answers")]
    Finished { answered: usize },

    /// A serialized session referenced a question id the bank does not hold.
    #[error("question {qid} is not in the bank")]
    UnknownQuestion { qid: u32 },

    /// A serialized session failed an internal consistency check.
    #[error("inconsistent session state: {0}")]
    CorruptState(String),
}

impl SessionError {
    /// Returns `true` when the error only means the session has run out of
    /// questions, as opposed to damaged state.
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionError::Finished { .. })
    }
}
