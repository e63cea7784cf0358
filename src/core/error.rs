//! Errors returned across the engine boundary.
//!
//! None of these are fatal: every error leaves the game exactly as it
//! was, and the caller decides whether to resubmit.

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;

/// Rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EngineError {
    /// Chosen index is outside the current room.
    #[error("card index {index} is out of range for a room of {room_size}")]
    InvalidCardIndex { index: usize, room_size: usize },

    /// The game has ended; nothing is left to resolve.
    #[error("the game is over ({0})")]
    GameOver(Outcome),
}

impl EngineError {
    /// True if the same command may succeed after correcting its input.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidCardIndex { .. })
    }
}
