//! Discard pile.
//!
//! Pure bookkeeping: consumed monsters and potions, and weapons that were
//! replaced together with their ladders. Only the engine appends here.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered pile of spent cards, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Most recently discarded card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }
}
