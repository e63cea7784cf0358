//! Combat: the player's state and the rules that mutate it.
//!
//! - `CombatResolver`: pure damage/heal arithmetic and the ladder rule
//! - `CombatantState`: health, weapon, ladder; applies resolver results

pub mod combatant;
pub mod resolver;

pub use combatant::{AttackReport, CombatantState, PotionReport};
pub use resolver::{CombatResolver, WeaponUse};
