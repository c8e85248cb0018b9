//! Equipped weapon state.
//!
//! A `Weapon` wraps the diamond it was equipped from and carries the only
//! mutable card data in the game: durability and the chain of monsters
//! slain with it. The card itself stays immutable.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// The currently equipped weapon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// The diamond this weapon was equipped from.
    pub card: Card,

    /// Highest monster value (exclusive) this weapon can still be used on.
    /// Never increases; overwritten by each monster slain.
    pub durability: u8,

    pub equipped: bool,

    /// Monsters slain with this weapon, oldest first.
    pub chain: Vec<Card>,
}

impl Weapon {
    /// Equip a fresh weapon at full durability with an empty chain.
    #[must_use]
    pub fn equip(card: Card, max_durability: u8) -> Self {
        Self {
            card,
            durability: max_durability,
            equipped: true,
            chain: Vec::new(),
        }
    }

    /// Attack value.
    #[must_use]
    pub const fn attack(&self) -> u8 {
        self.card.value
    }

    /// Whether the weapon may be used against a monster of `value`.
    ///
    /// Strict: a weapon at durability 6 cannot fight a 6.
    #[must_use]
    pub const fn can_fight(&self, value: u8) -> bool {
        self.durability > value
    }

    /// Damage that gets through the weapon against a monster of `value`.
    #[must_use]
    pub const fn excess_damage(&self, value: u8) -> u8 {
        value.saturating_sub(self.attack())
    }

    /// Record a kill: durability drops to the monster's value and the
    /// monster joins the chain.
    pub fn absorb(&mut self, monster: Card) {
        debug_assert!(self.can_fight(monster.value));
        self.durability = monster.value;
        self.chain.push(monster);
    }

    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "Weapon with {} attack. Current durability is {}.",
            self.attack(),
            self.durability
        )
    }
}
