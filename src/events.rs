//! Structured outcomes of card resolutions.
//!
//! The engine performs no output. Each resolved card produces one
//! `GameEvent` describing what happened, which the presentation layer is
//! free to render however it likes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combat::{AttackReport, PotionReport, WeaponUse};

/// What resolving one room card did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A monster was fought.
    ///
    /// Slain with the weapon, the monster joins the ladder; fought
    /// barehanded, it is discarded.
    MonsterFought(AttackReport),

    /// A weapon was equipped, discarding the previous weapon and ladder.
    WeaponEquipped {
        weapon: Card,
        discarded: Vec<Card>,
    },

    /// A potion was drunk, or wasted if one was already used this turn.
    PotionUsed(PotionReport),
}

impl GameEvent {
    /// The room card that was resolved.
    #[must_use]
    pub fn card(&self) -> Card {
        match self {
            GameEvent::MonsterFought(report) => report.monster,
            GameEvent::WeaponEquipped { weapon, .. } => *weapon,
            GameEvent::PotionUsed(report) => report.potion,
        }
    }

    /// Damage taken, zero for non-combat events.
    #[must_use]
    pub fn damage(&self) -> i32 {
        match self {
            GameEvent::MonsterFought(report) => report.damage,
            _ => 0,
        }
    }

    /// Health gained, zero for non-potion events.
    #[must_use]
    pub fn healed(&self) -> i32 {
        match self {
            GameEvent::PotionUsed(report) => report.healed,
            _ => 0,
        }
    }

    /// Cards this resolution moved to the discard pile, in order.
    #[must_use]
    pub fn discarded(&self) -> Vec<Card> {
        match self {
            GameEvent::MonsterFought(report) => match report.weapon_use {
                WeaponUse::Weapon => Vec::new(),
                WeaponUse::BarehandedUnarmed | WeaponUse::BarehandedLadderBlocked => {
                    vec![report.monster]
                }
            },
            GameEvent::WeaponEquipped { discarded, .. } => discarded.clone(),
            GameEvent::PotionUsed(report) => vec![report.potion],
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::MonsterFought(r) if r.weapon_use.used_weapon() => write!(
                f,
                "slew the {} with a weapon, took {} damage (health {})",
                r.monster, r.damage, r.health_after
            ),
            GameEvent::MonsterFought(r) => write!(
                f,
                "fought the {} barehanded, took {} damage (health {})",
                r.monster, r.damage, r.health_after
            ),
            GameEvent::WeaponEquipped { weapon, discarded } if discarded.is_empty() => {
                write!(f, "equipped the {weapon}")
            }
            GameEvent::WeaponEquipped { weapon, discarded } => write!(
                f,
                "equipped the {weapon}, discarding {} card(s)",
                discarded.len()
            ),
            GameEvent::PotionUsed(r) if r.consumed => write!(
                f,
                "drank the {}, healed {} (health {})",
                r.potion, r.healed, r.health_after
            ),
            GameEvent::PotionUsed(r) => {
                write!(f, "already drank a potion this turn, discarded the {}", r.potion)
            }
        }
    }
}
