//! Engine configuration and fixed rule constants.
//!
//! The rules themselves are not configurable: health, room size and the
//! number of resolutions per room are constants of the variant. What a
//! caller does control is where randomness comes from and whether the
//! engine keeps a command history.

use serde::{Deserialize, Serialize};

/// Health the player starts with.
pub const STARTING_HEALTH: i32 = 20;

/// Healing never raises health above this.
pub const MAX_HEALTH: i32 = 20;

/// Cards in a full room.
pub const ROOM_SIZE: usize = 4;

/// Cards resolved from each room before the rest carries over.
pub const ACTIONS_PER_ROOM: usize = 3;

/// Cards in a freshly built deck (52 minus the 8 red faces and aces).
pub const DECK_SIZE: usize = 44;

/// Configuration for a new game.
///
/// ```
/// use scoundrel::core::GameConfig;
///
/// let config = GameConfig::new().with_seed(42).without_history();
/// assert_eq!(config.seed, Some(42));
/// assert!(!config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Keep every accepted command in the engine's history.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Unseeded configuration with history enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable command history (cheaper clones for look-ahead).
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_seed(9);
        assert_eq!(config.seed, Some(9));
        assert!(config.record_history);

        let quiet = config.without_history();
        assert!(!quiet.record_history);
    }

    #[test]
    fn test_rule_constants_agree() {
        assert_eq!(DECK_SIZE, 52 - 8);
        assert!(ACTIONS_PER_ROOM < ROOM_SIZE);
        assert!(STARTING_HEALTH <= MAX_HEALTH);
    }
}
