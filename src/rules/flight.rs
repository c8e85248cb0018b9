//! Running away from a room.

use crate::core::error::RuleViolation;
use crate::core::state::GameState;

/// Flee the current room. The whole room goes to the bottom of the deck
/// and a fresh one is dealt.
///
/// Not allowed after a card has been played in the room, nor straight
/// after another run.
pub fn run(state: &mut GameState) -> Result<(), RuleViolation> {
    state.ensure_active()?;
    state.run()?;
    state.log("You ran from the room.");
    Ok(())
}
