//! Room assembly and the skip-room rule.
//!
//! Each turn the player faces a room of four cards: whatever carried
//! over from the last room, topped up from the front of the deck. A
//! room that cannot be filled means the dungeon is cleared.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deck::Deck;
use crate::cards::Card;
use crate::core::config::ROOM_SIZE;
use crate::core::rng::GameRng;

/// The cards of the current room, in presentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    cards: SmallVec<[Card; ROOM_SIZE]>,
}

impl Room {
    /// Room holding exactly these cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when the room holds a full complement of cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= ROOM_SIZE
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Empty the room, returning its cards in order.
    pub fn drain(&mut self) -> SmallVec<[Card; ROOM_SIZE]> {
        std::mem::take(&mut self.cards)
    }
}

/// Result of a room decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipOutcome {
    /// The room went back into the deck.
    Skipped,
    /// The previous room was skipped; this one must be entered.
    Rejected,
    /// The player chose to enter the room.
    Declined,
    /// No room decision is pending.
    NotApplicable,
}

/// Builds rooms and enforces "no two skips in a row".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomManager {
    last_room_skipped: bool,
}

impl RoomManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous room was skipped.
    #[must_use]
    pub fn last_room_skipped(&self) -> bool {
        self.last_room_skipped
    }

    /// Whether the current room may be skipped.
    #[must_use]
    pub fn can_skip(&self) -> bool {
        !self.last_room_skipped
    }

    /// Start a room with `carryover`, then draw until it is full.
    ///
    /// A room shorter than [`ROOM_SIZE`] means the deck ran dry.
    pub fn draw_room(&self, deck: &mut Deck, carryover: Option<Card>) -> Room {
        let mut cards: SmallVec<[Card; ROOM_SIZE]> = carryover.into_iter().collect();
        let missing = ROOM_SIZE.saturating_sub(cards.len());
        cards.extend(deck.draw_front(missing));
        Room { cards }
    }

    /// Send the whole room back into the deck and reshuffle.
    ///
    /// Rejected without touching anything if the last room was skipped.
    /// On success `room` is left empty.
    pub fn skip_room(&mut self, deck: &mut Deck, room: &mut Room, rng: &mut GameRng) -> SkipOutcome {
        if self.last_room_skipped {
            return SkipOutcome::Rejected;
        }

        deck.requeue_and_shuffle(room.drain(), rng);
        self.last_room_skipped = true;
        SkipOutcome::Skipped
    }

    /// Record that the current room is being resolved.
    pub fn enter_room(&mut self) {
        self.last_room_skipped = false;
    }
}
