//! Combat resolution and weapon equipping.
//!
//! ## Barehanded
//!
//! The monster's full value is taken as damage.
//!
//! ## Weapon-assisted
//!
//! Only usable while `durability > monster.value`. The weapon absorbs up
//! to its own attack value; any excess gets through. After the kill the
//! weapon's durability is overwritten with the monster's value, so every
//! later monster fought with it must be strictly weaker.
//!
//! A fatal blow ends the game before the kill completes: the monster stays
//! in the room, the counter is untouched and the weapon is unchanged.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRole, Weapon};
use crate::core::command::FightMode;
use crate::core::error::RuleViolation;
use crate::core::state::GameState;

/// Result of a resolved fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightReport {
    pub monster: Card,
    pub mode: FightMode,
    /// Damage that reached the player.
    pub damage_taken: u8,
    /// False if the player died before the kill completed.
    pub slain: bool,
    /// Weapon durability after the fight (weapon-assisted only).
    pub durability: Option<u8>,
}

/// Result of equipping a weapon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipReport {
    pub weapon: Card,
    /// The weapon (and chain) that was thrown away, if any.
    pub replaced: Option<Weapon>,
}

/// Fight a monster in the current room.
pub fn fight(state: &mut GameState, card: Card, mode: FightMode) -> Result<FightReport, RuleViolation> {
    state.ensure_active()?;
    state.ensure_in_room(card)?;
    if !card.is_monster() {
        return Err(RuleViolation::wrong_card_type(card, CardRole::Monster));
    }

    let title = card.title();
    let report = match mode {
        FightMode::Barehanded => {
            let damage = card.value;
            if !state.take_damage(damage) {
                state.log(format!("Fought the {title} barehanded but did not survive."));
                return Ok(FightReport {
                    monster: card,
                    mode,
                    damage_taken: damage,
                    slain: false,
                    durability: None,
                });
            }
            state.log(format!(
                "Defeated the {title} barehanded and took {damage} damage."
            ));
            FightReport {
                monster: card,
                mode,
                damage_taken: damage,
                slain: true,
                durability: None,
            }
        }
        FightMode::WeaponAssisted => {
            let weapon = state.weapon.as_ref().ok_or(RuleViolation::NoWeaponEquipped)?;
            if !weapon.can_fight(card.value) {
                return Err(RuleViolation::InsufficientDurability {
                    monster: card,
                    durability: weapon.durability,
                });
            }

            let excess = weapon.excess_damage(card.value);
            let durability_before = weapon.durability;
            if excess > 0 && !state.take_damage(excess) {
                state.log(format!("Fought the {title} but did not survive."));
                return Ok(FightReport {
                    monster: card,
                    mode,
                    damage_taken: excess,
                    slain: false,
                    durability: Some(durability_before),
                });
            }

            if let Some(weapon) = state.weapon.as_mut() {
                weapon.absorb(card);
            }
            if excess > 0 {
                state.log(format!(
                    "Defeated the {title}, but took {excess} excess damage."
                ));
            } else {
                state.log(format!("Defeated the {title}."));
            }
            FightReport {
                monster: card,
                mode,
                damage_taken: excess,
                slain: true,
                durability: Some(card.value),
            }
        }
    };

    state.play_card(card)?;
    state.defeat_monster();
    Ok(report)
}

/// Equip a weapon from the current room, discarding the old one and its
/// chain.
pub fn equip(state: &mut GameState, card: Card) -> Result<EquipReport, RuleViolation> {
    state.ensure_active()?;
    state.ensure_in_room(card)?;
    if !card.is_weapon() {
        return Err(RuleViolation::wrong_card_type(card, CardRole::Weapon));
    }

    let fresh = Weapon::equip(card, state.config().max_weapon_durability);
    let replaced = state.weapon.replace(fresh);
    state.log(format!("Equipped the {}.", card.title()));
    state.play_card(card)?;

    Ok(EquipReport {
        weapon: card,
        replaced,
    })
}
