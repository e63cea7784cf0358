//! Card system.
//!
//! ## Key Types
//!
//! - `Rank`: 2 through Ace, with a const strength table
//! - `Suit`: Hearts, Diamonds, Spades, Clubs
//! - `Card`: immutable rank/suit pair
//! - `CardKind`: monster, weapon or potion, decided by suit

pub mod card;

pub use card::{Card, CardKind, Rank, Suit};
