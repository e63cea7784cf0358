//! Playing cards: rank, suit, and numeric strength.
//!
//! A card's role in the dungeon is fixed by its suit:
//! - Spades and Clubs are monsters
//! - Diamonds are weapons
//! - Hearts are potions
//!
//! Strength is the card's rank value, with faces and aces counting
//! 11 through 14.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Card rank, ordered by strength.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Numeric strength: 2-10 as printed, Jack 11, Queen 12, King 13, Ace 14.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    /// Jack, Queen, King or Ace.
    #[must_use]
    pub const fn is_face_or_ace(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    /// Rank for a strength value, if one exists.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        Self::iter().find(|rank| rank.value() == value)
    }

    const fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// Hearts or Diamonds.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// What a card of this suit does when resolved.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Suit::Spades | Suit::Clubs => CardKind::Monster,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Hearts => CardKind::Potion,
        }
    }
}

/// Role of a card in the dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardKind {
    Monster,
    Weapon,
    Potion,
}

/// An immutable playing card.
///
/// ```
/// use scoundrel::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Spades);
/// assert_eq!(card.numeric_value(), 12);
/// assert_eq!(card.to_string(), "Queen of Spades");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Numeric strength of the card.
    #[must_use]
    pub const fn numeric_value(&self) -> i32 {
        self.rank.value()
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.suit.kind()
    }

    #[must_use]
    pub const fn is_monster(&self) -> bool {
        matches!(self.kind(), CardKind::Monster)
    }

    #[must_use]
    pub const fn is_weapon(&self) -> bool {
        matches!(self.kind(), CardKind::Weapon)
    }

    #[must_use]
    pub const fn is_potion(&self) -> bool {
        matches!(self.kind(), CardKind::Potion)
    }

    /// True for the red faces and aces that the dungeon deck leaves out.
    #[must_use]
    pub const fn is_removed_from_dungeon(&self) -> bool {
        self.suit.is_red() && self.rank.is_face_or_ace()
    }

    /// All 52 cards of a standard deck, suit by suit.
    pub fn standard_deck() -> impl Iterator<Item = Card> {
        Suit::iter().flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        let expected = [
            (Rank::Two, 2),
            (Rank::Three, 3),
            (Rank::Four, 4),
            (Rank::Five, 5),
            (Rank::Six, 6),
            (Rank::Seven, 7),
            (Rank::Eight, 8),
            (Rank::Nine, 9),
            (Rank::Ten, 10),
            (Rank::Jack, 11),
            (Rank::Queen, 12),
            (Rank::King, 13),
            (Rank::Ace, 14),
        ];

        for (rank, value) in expected {
            assert_eq!(Card::new(rank, Suit::Clubs).numeric_value(), value);
        }
    }

    #[test]
    fn test_value_is_const() {
        const ACE: i32 = Rank::Ace.value();
        assert_eq!(ACE, 14);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(2), Some(Rank::Two));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_kinds() {
        assert!(Card::new(Rank::Nine, Suit::Spades).is_monster());
        assert!(Card::new(Rank::Nine, Suit::Clubs).is_monster());
        assert!(Card::new(Rank::Nine, Suit::Diamonds).is_weapon());
        assert!(Card::new(Rank::Nine, Suit::Hearts).is_potion());
        assert_eq!(CardKind::Monster.to_string(), "monster");
    }

    #[test]
    fn test_removed_cards() {
        assert!(Card::new(Rank::Ace, Suit::Hearts).is_removed_from_dungeon());
        assert!(Card::new(Rank::Jack, Suit::Diamonds).is_removed_from_dungeon());
        assert!(!Card::new(Rank::Ten, Suit::Diamonds).is_removed_from_dungeon());
        assert!(!Card::new(Rank::Ace, Suit::Spades).is_removed_from_dungeon());
    }

    #[test]
    fn test_standard_deck() {
        let cards: Vec<_> = Card::standard_deck().collect();
        assert_eq!(cards.len(), 52);

        let mut unique = cards.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "Ace of Clubs");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::King, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
