//! Legal command enumeration.
//!
//! Lists exactly the commands that would currently succeed. Presentation
//! layers use it to enable buttons; bots and property tests use it to
//! drive random playouts.

use crate::cards::CardRole;
use crate::core::command::{Command, FightMode};
use crate::core::state::GameState;

/// Every command that `apply` would accept right now, room order first,
/// then `Run`. `NewGame` is always legal and is not listed.
#[must_use]
pub fn legal_commands(state: &GameState) -> Vec<Command> {
    if state.is_over() {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(6);
    for &card in state.dungeon().room() {
        match card.role() {
            CardRole::Monster => {
                commands.push(Command::Fight {
                    card,
                    mode: FightMode::Barehanded,
                });
                if state.weapon().is_some_and(|w| w.can_fight(card.value)) {
                    commands.push(Command::Fight {
                        card,
                        mode: FightMode::WeaponAssisted,
                    });
                }
            }
            CardRole::Weapon => commands.push(Command::Equip(card)),
            // Legal even with the gate closed; it just has no effect.
            CardRole::Potion => commands.push(Command::Drink(card)),
        }
    }

    if state.dungeon().can_run() {
        commands.push(Command::Run);
    }
    commands
}
