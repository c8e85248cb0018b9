//! Rule violations.
//!
//! Every expected way a command can be refused. A violation never mutates
//! the session; callers can show the message and carry on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, CardRole};

/// Stable reason code for a rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    WrongCardType,
    NoWeaponEquipped,
    InsufficientDurability,
    CannotRunNow,
    GameAlreadyOver,
    CardNotInRoom,
}

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The card cannot be used by this command (fighting a potion, ...).
    #[error("You can't {verb} that! The {} is a {actual}.", .card.title())]
    WrongCardType {
        card: Card,
        expected: CardRole,
        actual: CardRole,
        verb: &'static str,
    },

    #[error("Please equip a weapon first.")]
    NoWeaponEquipped,

    #[error("Not enough durability! The weapon can only fight monsters below {durability}, the {} has {}.", .monster.title(), .monster.value)]
    InsufficientDurability { monster: Card, durability: u8 },

    #[error("You can't run twice in a row or after you have selected a card!")]
    CannotRunNow,

    #[error("The game is over. Start a new game to keep playing.")]
    GameAlreadyOver,

    /// Internal invariant violation: the caller named a card that is not
    /// in the current room.
    #[error("The {} is not in the current room.", .0.title())]
    CardNotInRoom(Card),
}

impl RuleViolation {
    /// Build a `WrongCardType` for `card` when `expected` was required.
    #[must_use]
    pub fn wrong_card_type(card: Card, expected: CardRole) -> Self {
        let verb = match expected {
            CardRole::Monster => "fight",
            CardRole::Weapon => "equip",
            CardRole::Potion => "drink",
        };
        RuleViolation::WrongCardType {
            card,
            expected,
            actual: card.role(),
            verb,
        }
    }

    /// The stable reason code.
    #[must_use]
    pub fn code(&self) -> ReasonCode {
        match self {
            RuleViolation::WrongCardType { .. } => ReasonCode::WrongCardType,
            RuleViolation::NoWeaponEquipped => ReasonCode::NoWeaponEquipped,
            RuleViolation::InsufficientDurability { .. } => ReasonCode::InsufficientDurability,
            RuleViolation::CannotRunNow => ReasonCode::CannotRunNow,
            RuleViolation::GameAlreadyOver => ReasonCode::GameAlreadyOver,
            RuleViolation::CardNotInRoom(_) => ReasonCode::CardNotInRoom,
        }
    }
}
