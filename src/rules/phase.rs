//! Turn phases and terminal outcomes.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// The deck could not fill another room.
    Win,
    /// Health dropped to zero or below.
    Loss,
}

/// Where the engine is in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A full room is on the table; the player may skip it or enter it.
    AwaitingRoomDecision,

    /// The room was entered; this many cards are still to be resolved.
    ResolvingRoom { remaining_actions: usize },

    /// Terminal. No command changes the game any more.
    GameOver(Outcome),
}

impl Phase {
    /// The outcome, if the game has ended.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::GameOver(outcome) => Some(*outcome),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// A successfully resolved room card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// What the card did.
    pub event: GameEvent,
    /// Phase after the resolution (and any room change it triggered).
    pub phase: Phase,
}
