//! Read-only view of a game for rendering.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::cards::Card;

/// Everything a presentation layer needs to draw the table.
///
/// The deck's order is hidden; only its size is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub health: i32,
    pub weapon: Option<Card>,
    pub ladder: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_room: Vec<Card>,
    /// True only while a room decision is pending and the last room was not skipped.
    pub can_skip: bool,
    pub potion_used_this_turn: bool,
    pub deck_remaining: usize,
    pub turn: u32,
    pub phase: Phase,
}

impl Snapshot {
    /// Weapon strength, or 0 when unarmed.
    #[must_use]
    pub fn weapon_strength(&self) -> i32 {
        self.weapon.map_or(0, |w| w.numeric_value())
    }

    /// Strength the next monster must stay under to use the weapon.
    #[must_use]
    pub fn ladder_limit(&self) -> Option<i32> {
        self.ladder.last().map(Card::numeric_value)
    }
}
