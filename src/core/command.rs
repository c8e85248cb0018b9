//! Player commands.
//!
//! A command is a verb plus at most one card. Unlike the general action
//! model of a multiplayer engine there is no player pointer: the dungeon
//! has exactly one adventurer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// How a monster is fought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightMode {
    /// Take the monster's full value as damage.
    Barehanded,
    /// Use the equipped weapon; only excess damage gets through.
    WeaponAssisted,
}

/// A complete player command.
///
/// ## Example
///
/// ```
/// use rust_scoundrel::cards::{Card, Suit};
/// use rust_scoundrel::core::{Command, FightMode};
///
/// let fight = Command::Fight {
///     card: Card::new(Suit::Spade, 5),
///     mode: FightMode::Barehanded,
/// };
/// assert_eq!(fight.card(), Some(Card::new(Suit::Spade, 5)));
/// assert_eq!(Command::Run.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Reset the session and deal a fresh dungeon.
    NewGame { easy_mode: bool },
    Fight { card: Card, mode: FightMode },
    Equip(Card),
    Drink(Card),
    /// Flee the current room.
    Run,
}

impl Command {
    /// The card this command acts on, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match *self {
            Command::Fight { card, .. } | Command::Equip(card) | Command::Drink(card) => Some(card),
            Command::NewGame { .. } | Command::Run => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NewGame { easy_mode: true } => f.write_str("new game (easy)"),
            Command::NewGame { easy_mode: false } => f.write_str("new game"),
            Command::Fight { card, mode: FightMode::Barehanded } => write!(f, "fight {card} barehanded"),
            Command::Fight { card, mode: FightMode::WeaponAssisted } => write!(f, "fight {card} with weapon"),
            Command::Equip(card) => write!(f, "equip {card}"),
            Command::Drink(card) => write!(f, "drink {card}"),
            Command::Run => f.write_str("run"),
        }
    }
}

/// A successful command with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command applied.
    pub command: Command,

    /// Room number the command was issued in (starts at 1).
    pub room: u32,

    /// Sequence number within the session.
    pub sequence: u32,
}

impl CommandRecord {
    #[must_use]
    pub fn new(command: Command, room: u32, sequence: u32) -> Self {
        Self {
            command,
            room,
            sequence,
        }
    }
}
