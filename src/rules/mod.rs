//! Game rules: combat, equipping, potions, running, and legal commands.
//!
//! Each resolver takes the session aggregate, checks its own
//! preconditions, and either mutates the state and returns a report or
//! returns a `RuleViolation` without touching anything.

pub mod combat;
pub mod flight;
pub mod legal;
pub mod potion;

use serde::{Deserialize, Serialize};

pub use combat::{equip, fight, EquipReport, FightReport};
pub use flight::run;
pub use legal::legal_commands;
pub use potion::{drink, PotionReport};

/// What a successful command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Report {
    NewGame,
    Fight(FightReport),
    Equip(EquipReport),
    Drink(PotionReport),
    Run,
}
