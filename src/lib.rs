//! # scoundrel
//!
//! Rules engine for Scoundrel, a single-player card dungeon played with
//! a 44-card deck.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: the engine takes structured commands and returns
//!    structured results and events. Rendering and input belong to the
//!    caller.
//!
//! 2. **Deterministic**: all randomness flows through one seeded
//!    `GameRng`, so a seed plus the command history reproduces a game.
//!
//! 3. **Single owner**: `GameEngine` owns every card container. Combat
//!    operations hand displaced cards back instead of reaching into the
//!    discard pile.
//!
//! ## Modules
//!
//! - `core`: commands, RNG, configuration, errors
//! - `cards`: ranks, suits, cards
//! - `zones`: deck, room, discard pile, card census
//! - `combat`: combatant state and combat arithmetic
//! - `events`: structured resolution outcomes
//! - `rules`: the turn state machine
//! - `agents`: automated players

pub mod core;
pub mod cards;
pub mod zones;
pub mod combat;
pub mod events;
pub mod rules;
pub mod agents;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Command, EngineError, GameConfig, GameRng, GameRngState,
};

pub use crate::cards::{Card, CardKind, Rank, Suit};

pub use crate::zones::{Census, CensusError, Deck, DiscardPile, Room, RoomManager, SkipOutcome, Zone};

pub use crate::combat::{AttackReport, CombatResolver, CombatantState, PotionReport, WeaponUse};

pub use crate::events::GameEvent;

pub use crate::rules::{Applied, GameEngine, Outcome, Phase, Resolution, Snapshot};

pub use crate::agents::{play_out, GreedyPolicy, Policy, PlayoutSummary, RandomPolicy};
