//! Potion handling.
//!
//! Only the first potion drunk in a room heals. Later potions in the same
//! room are still consumed (they leave the room) but restore nothing.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRole};
use crate::core::error::RuleViolation;
use crate::core::state::GameState;

/// Result of drinking a potion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionReport {
    pub potion: Card,
    /// Health actually gained, after the max-health cap.
    pub restored: u8,
    /// True if the once-per-room gate was already closed.
    pub wasted: bool,
}

/// Drink a potion from the current room.
pub fn drink(state: &mut GameState, card: Card) -> Result<PotionReport, RuleViolation> {
    state.ensure_active()?;
    state.ensure_in_room(card)?;
    if !card.is_potion() {
        return Err(RuleViolation::wrong_card_type(card, CardRole::Potion));
    }

    let title = card.title();
    let report = if state.can_drink_potion() {
        let restored = state.heal(card.value);
        state.close_potion_gate();
        state.log(format!("Drank the {title}, restored {restored} health."));
        PotionReport {
            potion: card,
            restored,
            wasted: false,
        }
    } else {
        state.log(format!(
            "Drank the {title}, but it had no effect. Potions can only be used once per room."
        ));
        PotionReport {
            potion: card,
            restored: 0,
            wasted: true,
        }
    };

    state.play_card(card)?;
    Ok(report)
}
