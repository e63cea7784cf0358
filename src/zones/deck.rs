//! The dungeon deck.
//!
//! An ordered pile of cards where index 0 is the front (next to draw).
//! The deck never invents or duplicates cards: everything it holds was
//! either there at build time or handed back by the room manager.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Ordered, mutable sequence of cards.
///
/// ## Usage
///
/// ```
/// use scoundrel::core::GameRng;
/// use scoundrel::zones::Deck;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::build();
/// deck.shuffle(&mut rng);
///
/// let room = deck.draw_front(4);
/// assert_eq!(room.len(), 4);
/// assert_eq!(deck.len(), 40);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the 44-card dungeon: a standard deck without red faces and aces.
    ///
    /// The result is in suit/rank order; shuffle before play.
    #[must_use]
    pub fn build() -> Self {
        let cards = Card::standard_deck()
            .filter(|card| !card.is_removed_from_dungeon())
            .collect();
        Self { cards }
    }

    /// Deck holding exactly these cards, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Uniformly permute the whole deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove up to `n` cards from the front.
    ///
    /// Returns fewer than `n` when the deck runs short.
    pub fn draw_front(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Append `cards` and reshuffle everything.
    ///
    /// This is a full reshuffle: returned cards can end up anywhere,
    /// including the front.
    pub fn requeue_and_shuffle<I>(&mut self, cards: I, rng: &mut GameRng)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
