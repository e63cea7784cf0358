//! Player commands and the history of accepted commands.
//!
//! A game is driven by exactly two kinds of input: the room decision
//! (skip or not) and the choice of which room card to resolve next.
//! Both are captured as a [`Command`], so a seed plus the command list
//! is enough to rebuild any game.

use serde::{Deserialize, Serialize};

/// A single player input.
///
/// ```
/// use scoundrel::core::Command;
///
/// let pick = Command::Choose(2);
/// assert_eq!(pick.to_string(), "choose card 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Answer the room decision: `true` asks to skip the room.
    Skip(bool),

    /// Resolve the room card at this index (0-based).
    Choose(usize),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Skip(true) => write!(f, "skip room"),
            Command::Skip(false) => write!(f, "enter room"),
            Command::Choose(index) => write!(f, "choose card {}", index + 1),
        }
    }
}

/// An accepted command with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The command taken.
    pub command: Command,

    /// Turn number when it was taken (starts at 1, skips count as turns).
    pub turn: u32,

    /// Global sequence number.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            command,
            turn,
            sequence,
        }
    }
}
