//! # rust-scoundrel
//!
//! Rules engine for Scoundrel, a single-player dungeon crawl played with
//! a trimmed deck of playing cards.
//!
//! ## Rules in Brief
//!
//! Spades and clubs are monsters, diamonds are weapons, hearts are
//! potions. Each room shows four cards. Play cards from the room until one
//! is left; it carries into the next room. You may run from a room
//! (sending it to the bottom of the deck) but never twice in a row nor
//! after playing a card there. Defeat every monster to win; reach zero
//! health and you lose.
//!
//! ## Design Principles
//!
//! 1. **One Aggregate**: All mutable state lives in `GameState`, owned by a
//!    `Session`. Sessions are independent.
//!
//! 2. **Rejections Are Values**: Every rule violation is a `RuleViolation`
//!    and leaves the state untouched.
//!
//! 3. **Presentation Outside**: Renderers read `Snapshot`s and subscribe to
//!    `StateEvent`s; the engine never draws anything.
//!
//! ## Modules
//!
//! - `core`: State, commands, errors, RNG, configuration
//! - `cards`: Cards, suits, weapons, and deck construction
//! - `zones`: Deck, room, and discard pile
//! - `rules`: Combat, equipping, potions, running, legal commands
//! - `events`: State-changed events and observers
//! - `session`: The `Session` controller

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod events;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord, FightMode,
    ConfigError, GameConfig,
    ReasonCode, RuleViolation,
    GameRng, GameRngState,
    GameState, Outcome, Snapshot,
};

pub use crate::cards::{Card, CardRole, Suit, Weapon};

pub use crate::zones::{Dungeon, Room};

pub use crate::rules::{EquipReport, FightReport, PotionReport, Report};

pub use crate::events::{EventBus, StateEvent, StateField, StateObserver, SubscriptionId};

pub use crate::session::Session;
