//! Core engine types: state, commands, errors, RNG, configuration.
//!
//! Everything here is independent of how the game is presented. Rules in
//! `crate::rules` read and mutate `GameState` through the crate-private
//! mutators defined in `state`.

pub mod command;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use command::{Command, CommandRecord, FightMode};
pub use config::{ConfigError, GameConfig};
pub use error::{ReasonCode, RuleViolation};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Outcome, Snapshot};
