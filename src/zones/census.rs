//! Card accounting across zones.
//!
//! Every one of the 44 dungeon cards is in exactly one place at all
//! times: the deck, the current room, the carryover slot, the weapon
//! slot, the ladder, or the discard pile. `Census` records where each
//! card was seen and reports the first violation it finds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::cards::Card;
use crate::core::config::DECK_SIZE;

/// A place a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Zone {
    Deck,
    Room,
    Carryover,
    Weapon,
    Ladder,
    Discard,
}

/// A zone accounting violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CensusError {
    #[error("{card} is in both the {first} and the {second}")]
    Duplicate { card: Card, first: Zone, second: Zone },

    #[error("{card} is not part of the dungeon deck but was found in the {zone}")]
    Unexpected { card: Card, zone: Zone },

    #[error("{0} is missing from every zone")]
    Missing(Card),
}

/// Location of every counted card.
#[derive(Clone, Debug, Default)]
pub struct Census {
    locations: FxHashMap<Card, Zone>,
    first_error: Option<CensusError>,
}

impl Census {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `cards` as being in `zone`.
    #[must_use]
    pub fn with<'a, I>(mut self, zone: Zone, cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        for card in cards {
            self.record(*card, zone);
        }
        self
    }

    fn record(&mut self, card: Card, zone: Zone) {
        if self.first_error.is_some() {
            return;
        }
        if card.is_removed_from_dungeon() {
            self.first_error = Some(CensusError::Unexpected { card, zone });
            return;
        }
        if let Some(first) = self.locations.insert(card, zone) {
            self.first_error = Some(CensusError::Duplicate {
                card,
                first,
                second: zone,
            });
        }
    }

    /// Zone a card was counted in.
    #[must_use]
    pub fn zone_of(&self, card: &Card) -> Option<Zone> {
        self.locations.get(card).copied()
    }

    /// Number of cards counted in `zone`.
    #[must_use]
    pub fn count(&self, zone: Zone) -> usize {
        self.locations.values().filter(|&&z| z == zone).count()
    }

    /// Number of distinct cards counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.locations.len()
    }

    /// Check that the counted cards are exactly the 44-card dungeon.
    pub fn verify(&self) -> Result<(), CensusError> {
        if let Some(err) = self.first_error {
            return Err(err);
        }
        debug_assert!(self.locations.len() <= DECK_SIZE);

        match Deck::build()
            .cards()
            .iter()
            .find(|card| !self.locations.contains_key(card))
        {
            Some(card) => Err(CensusError::Missing(*card)),
            None => Ok(()),
        }
    }
}
