//! Game rules: the turn state machine and its public API.
//!
//! The presentation layer drives a [`GameEngine`] with room decisions and
//! card choices, reads [`Snapshot`]s to render the table, and receives a
//! [`GameEvent`](crate::events::GameEvent) for every resolved card. The
//! engine itself never performs I/O.

pub mod engine;
pub mod phase;
pub mod snapshot;

pub use engine::{Applied, GameEngine};
pub use phase::{Outcome, Phase, Resolution};
pub use snapshot::Snapshot;
