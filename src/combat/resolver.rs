//! Pure combat and healing arithmetic.
//!
//! `CombatResolver` never touches game state. It answers "may this weapon
//! be used", "how much damage does this fight deal" and "how much does
//! this potion heal"; `CombatantState` applies the answers.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::MAX_HEALTH;

/// How a monster was fought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponUse {
    /// The equipped weapon took the hit; the monster joins the ladder.
    Weapon,
    /// No weapon was equipped.
    BarehandedUnarmed,
    /// A weapon was equipped but the ladder rule forbade using it.
    BarehandedLadderBlocked,
}

impl WeaponUse {
    #[must_use]
    pub const fn used_weapon(self) -> bool {
        matches!(self, WeaponUse::Weapon)
    }
}

/// Combat and healing rules.
pub struct CombatResolver;

impl CombatResolver {
    /// Whether `weapon` may be used against `monster` given its ladder.
    ///
    /// A fresh weapon works on anything. Once used, it only works on
    /// monsters strictly weaker than the last one it slew.
    #[must_use]
    pub fn weapon_usable(weapon: Option<&Card>, ladder: &[Card], monster: &Card) -> bool {
        if weapon.is_none() {
            return false;
        }
        match ladder.last() {
            None => true,
            Some(last) => monster.numeric_value() < last.numeric_value(),
        }
    }

    /// Damage taken from fighting `monster`, and how it was fought.
    #[must_use]
    pub fn attack_damage(weapon: Option<&Card>, ladder: &[Card], monster: &Card) -> (i32, WeaponUse) {
        let strength = monster.numeric_value();
        match weapon {
            Some(w) if Self::weapon_usable(weapon, ladder, monster) => {
                ((strength - w.numeric_value()).max(0), WeaponUse::Weapon)
            }
            Some(_) => (strength, WeaponUse::BarehandedLadderBlocked),
            None => (strength, WeaponUse::BarehandedUnarmed),
        }
    }

    /// Health gained from `potion`; zero if a potion was already used this turn.
    #[must_use]
    pub fn heal_amount(health: i32, potion: &Card, already_used: bool) -> i32 {
        if already_used {
            return 0;
        }
        (health + potion.numeric_value()).min(MAX_HEALTH) - health
    }
}
