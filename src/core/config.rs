//! Game configuration.
//!
//! Sessions are configured once at construction. `new_game` may flip the
//! easy-mode flag, everything else is fixed for the life of the session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::MAX_VALUE;

/// Default starting (and maximum) health.
pub const DEFAULT_MAX_HEALTH: u8 = 20;

/// Default durability of a freshly equipped weapon. Higher than any
/// monster so a new weapon can always be used once.
pub const DEFAULT_MAX_WEAPON_DURABILITY: u8 = 15;

/// Default number of cards dealt per room.
pub const DEFAULT_ROOM_SIZE: usize = 4;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting health and healing cap.
    pub max_health: u8,

    /// Durability a weapon has when equipped.
    pub max_weapon_durability: u8,

    /// Cards dealt per room.
    pub room_size: usize,

    /// Include the red face cards and aces.
    pub easy_mode: bool,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            max_weapon_durability: DEFAULT_MAX_WEAPON_DURABILITY,
            room_size: DEFAULT_ROOM_SIZE,
            easy_mode: false,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_easy_mode(mut self, easy_mode: bool) -> Self {
        self.easy_mode = easy_mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_health(mut self, health: u8) -> Self {
        self.max_health = health;
        self
    }

    #[must_use]
    pub fn with_max_weapon_durability(mut self, durability: u8) -> Self {
        self.max_weapon_durability = durability;
        self
    }

    #[must_use]
    pub fn with_room_size(mut self, size: usize) -> Self {
        self.room_size = size;
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        // A room of one would carry over forever; more than four breaks
        // the room invariant presentation layers rely on.
        if !(2..=DEFAULT_ROOM_SIZE).contains(&self.room_size) {
            return Err(ConfigError::RoomSize(self.room_size));
        }
        if self.max_weapon_durability <= MAX_VALUE {
            return Err(ConfigError::WeaponDurability(self.max_weapon_durability));
        }
        Ok(())
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max health must be at least 1")]
    ZeroHealth,

    #[error("room size must be between 2 and 4, got {0}")]
    RoomSize(usize),

    #[error("weapon durability must exceed the strongest monster (14), got {0}")]
    WeaponDurability(u8),
}
