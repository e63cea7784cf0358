//! Card containers: deck, room, discard pile, and the census that
//! checks they never lose or duplicate a card.
//!
//! ## Key Types
//!
//! - `Deck`: ordered draw pile, front first
//! - `Room`: the (up to) four cards faced this turn
//! - `RoomManager`: room assembly and the skip rule
//! - `DiscardPile`: spent cards
//! - `Census`: 44-card accounting across all zones

pub mod census;
pub mod deck;
pub mod discard;
pub mod room;

pub use census::{Census, CensusError, Zone};
pub use deck::Deck;
pub use discard::DiscardPile;
pub use room::{Room, RoomManager, SkipOutcome};
