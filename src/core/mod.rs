//! Core engine types: commands, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{ActionRecord, Command};
pub use config::{
    GameConfig, ACTIONS_PER_ROOM, DECK_SIZE, MAX_HEALTH, ROOM_SIZE, STARTING_HEALTH,
};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
