//! Automated players.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `RandomPolicy`: uniformly random legal command
//! - `GreedyPolicy`: searches the orderings of the current room

use crate::core::{Command, GameRng};
use crate::rules::{GameEngine, Outcome, Phase};

/// Chooses the next command for a game.
pub trait Policy {
    /// Pick a command, or `None` when the game is over.
    fn choose(&mut self, engine: &GameEngine) -> Option<Command>;
}

/// Plays a uniformly random legal command.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, engine: &GameEngine) -> Option<Command> {
        self.rng.choose(&engine.legal_commands()).copied()
    }
}

/// Exhaustive search over the current room.
///
/// Tries every order of the remaining resolutions on a copy of the
/// engine and plays the first step of the best line. Skips a room when
/// every line through it ends in death or leaves health below
/// `skip_below`.
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    skip_below: i32,
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self { skip_below: 6 }
    }
}

const LOSS_SCORE: i32 = i32::MIN / 2;
const WIN_SCORE: i32 = 10_000;

/// Outcome of the best resolution order found.
#[derive(Clone, Copy, Debug)]
struct Line {
    score: i32,
    /// Health when the line leaves the room (or ends the game).
    health: i32,
    first: Option<usize>,
}

impl GreedyPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip rooms whose best line ends with less health than this.
    #[must_use]
    pub fn with_skip_threshold(mut self, health: i32) -> Self {
        self.skip_below = health;
        self
    }

    fn score(engine: &GameEngine) -> i32 {
        let player = engine.combatant();
        match engine.is_game_over() {
            Some(Outcome::Loss) => LOSS_SCORE,
            Some(Outcome::Win) => WIN_SCORE + player.health(),
            None => {
                // A weapon is only worth what the ladder still lets it block.
                let weapon = player.weapon().map_or(0, |w| {
                    let limit = player.ladder().last().map_or(15, |l| l.numeric_value());
                    w.numeric_value().min(limit - 1)
                });
                player.health() * 4 + weapon * 2
            }
        }
    }

    /// Best line through the rest of the current room.
    fn search(engine: &GameEngine, turn: u32) -> Line {
        let mut best = Line {
            score: LOSS_SCORE - 1,
            health: engine.combatant().health(),
            first: None,
        };

        for index in 0..engine.room().len() {
            let mut next = engine.clone();
            if next.submit_card_choice(index).is_err() {
                continue;
            }

            let still_in_room =
                matches!(next.phase(), Phase::ResolvingRoom { .. }) && next.turn() == turn;
            let line = if still_in_room {
                Self::search(&next, turn)
            } else {
                Line {
                    score: Self::score(&next),
                    health: next.combatant().health(),
                    first: None,
                }
            };

            if line.score > best.score {
                best = Line {
                    first: Some(index),
                    ..line
                };
            }
        }

        best
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, engine: &GameEngine) -> Option<Command> {
        match engine.phase() {
            Phase::GameOver(_) => None,
            Phase::AwaitingRoomDecision => {
                if !engine.can_skip() {
                    return Some(Command::Skip(false));
                }

                let mut entered = engine.clone();
                entered.submit_skip_decision(false);
                let best = Self::search(&entered, entered.turn());

                let dangerous = best.score == LOSS_SCORE
                    || (best.score < WIN_SCORE && best.health < self.skip_below);
                Some(Command::Skip(dangerous))
            }
            Phase::ResolvingRoom { .. } => {
                let best = Self::search(engine, engine.turn());
                Some(Command::Choose(best.first.unwrap_or(0)))
            }
        }
    }
}
