//! Automated players for simulation, testing and benchmarks.
//!
//! ## Example
//!
//! ```
//! use scoundrel::agents::{play_out, RandomPolicy};
//! use scoundrel::core::GameConfig;
//! use scoundrel::rules::GameEngine;
//!
//! let mut engine = GameEngine::new(GameConfig::new().with_seed(42));
//! let summary = play_out(&mut engine, &mut RandomPolicy::new(7), 0);
//! assert!(summary.outcome.is_some());
//! ```

pub mod playout;
pub mod policy;

pub use playout::{play_out, PlayoutSummary};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
