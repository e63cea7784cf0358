//! The player's health, weapon, and ladder.

use serde::{Deserialize, Serialize};

use super::resolver::{CombatResolver, WeaponUse};
use crate::cards::Card;
use crate::core::config::{MAX_HEALTH, STARTING_HEALTH};

/// Outcome of fighting one monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub monster: Card,
    pub damage: i32,
    pub weapon_use: WeaponUse,
    pub health_after: i32,
}

/// Outcome of drinking (or wasting) one potion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionReport {
    pub potion: Card,
    /// Health actually gained after the cap.
    pub healed: i32,
    /// False when a potion had already been used this turn.
    pub consumed: bool,
    pub health_after: i32,
}

/// Player state.
///
/// Health is not clamped at zero: a fight can leave it negative, and the
/// engine checks for `<= 0` after every resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    health: i32,
    weapon: Option<Card>,
    ladder: Vec<Card>,
}

impl Default for CombatantState {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatantState {
    /// Full health, empty hands.
    #[must_use]
    pub fn new() -> Self {
        Self::with_health(STARTING_HEALTH)
    }

    /// Unarmed combatant at a given health.
    #[must_use]
    pub fn with_health(health: i32) -> Self {
        Self {
            health,
            weapon: None,
            ladder: Vec::new(),
        }
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn weapon(&self) -> Option<&Card> {
        self.weapon.as_ref()
    }

    /// Monsters slain with the current weapon, most recent last.
    #[must_use]
    pub fn ladder(&self) -> &[Card] {
        &self.ladder
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Equip `new_weapon`.
    ///
    /// Returns the displaced weapon followed by its ladder, for the caller
    /// to discard. Empty if nothing was equipped.
    #[must_use = "displaced cards must be discarded"]
    pub fn equip_weapon(&mut self, new_weapon: Card) -> Vec<Card> {
        let mut displaced = Vec::with_capacity(self.ladder.len() + 1);
        if let Some(old) = self.weapon.replace(new_weapon) {
            displaced.push(old);
        }
        displaced.append(&mut self.ladder);
        displaced
    }

    #[must_use]
    pub fn can_use_weapon_on(&self, monster: &Card) -> bool {
        CombatResolver::weapon_usable(self.weapon.as_ref(), &self.ladder, monster)
    }

    /// Fight `monster` and take the damage.
    ///
    /// On the weapon path the monster is added to the ladder; the caller
    /// still owns it for accounting and must not discard it.
    pub fn attack(&mut self, monster: Card) -> AttackReport {
        let (damage, weapon_use) =
            CombatResolver::attack_damage(self.weapon.as_ref(), &self.ladder, &monster);

        if weapon_use.used_weapon() {
            self.ladder.push(monster);
        }
        self.health -= damage;

        AttackReport {
            monster,
            damage,
            weapon_use,
            health_after: self.health,
        }
    }

    /// Drink `potion` unless one was already used this turn.
    pub fn use_potion(&mut self, potion: Card, already_used: bool) -> PotionReport {
        let healed = CombatResolver::heal_amount(self.health, &potion, already_used);
        self.health += healed;
        debug_assert!(self.health <= MAX_HEALTH || healed == 0);

        PotionReport {
            potion,
            healed,
            consumed: !already_used,
            health_after: self.health,
        }
    }
}
