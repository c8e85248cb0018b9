//! Session state: the single aggregate every rule reads and mutates.
//!
//! ## GameState
//!
//! Owns everything that changes during a run:
//! - Health and outcome
//! - Card zones (deck, room, discard) and the run flag
//! - The equipped weapon and its chain
//! - Remaining monster count and the potion gate
//! - Adventure log and command history
//!
//! ## Snapshot
//!
//! Read-only copy for presentation. The deck is an `im::Vector`, so taking
//! a snapshot is O(1) in the deck size.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::command::{Command, CommandRecord};
use super::config::{ConfigError, GameConfig};
use super::error::RuleViolation;
use super::rng::GameRng;
use crate::cards::{build_deck, Card, Composition, Weapon};
use crate::zones::{Dungeon, Room, RoomTransition};

/// Whether the run is still going.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Active,
    /// Every monster defeated.
    Won,
    /// Health reached zero.
    Lost,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Active)
    }
}

/// Full session state.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    health: u8,

    /// Card zones.
    pub(crate) dungeon: Dungeon,

    pub(crate) weapon: Option<Weapon>,

    remaining_monsters: u32,

    can_drink_potion: bool,

    outcome: Outcome,

    /// Adventure log, oldest first.
    log: Vector<String>,

    /// Successful commands, oldest first.
    history: Vector<CommandRecord>,

    next_sequence: u32,
}

impl GameState {
    /// Deal a new game: build and shuffle the deck, then deal the first room.
    pub fn new(config: GameConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::shuffled(config, rng))
    }

    /// Deal a new game from a stacked deck (front is drawn first).
    ///
    /// The monster count is taken from the deck, so rigged dungeons used in
    /// tests and puzzles still end in a win when they are cleared.
    pub fn with_deck(config: GameConfig, cards: Vec<Card>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::deal(config, cards))
    }

    /// Deal a shuffled deck. `config` must already be validated.
    pub(crate) fn shuffled(config: GameConfig, rng: &mut GameRng) -> Self {
        let cards = build_deck(config.easy_mode, rng);
        Self::deal(config, cards)
    }

    fn deal(config: GameConfig, cards: Vec<Card>) -> Self {
        debug_assert!(config.validate().is_ok());
        let monsters = Composition::of(&cards).monsters as u32;
        let mut dungeon = Dungeon::new(cards, config.room_size);
        dungeon.draw_room();

        let mut state = Self {
            health: config.max_health,
            config,
            dungeon,
            weapon: None,
            remaining_monsters: monsters,
            can_drink_potion: true,
            outcome: Outcome::Active,
            log: Vector::new(),
            history: Vector::new(),
            next_sequence: 0,
        };
        let entered = format!("Entered the dungeon with {} health.", state.health);
        state.log(entered);
        state
    }

    /// Override current health, clamped to `[1, max_health]`.
    ///
    /// Puzzle and test setup only; never used by the rules.
    #[must_use]
    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health.clamp(1, self.config.max_health);
        self
    }

    /// Equip a weapon directly, as if it had been played earlier.
    #[must_use]
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn health(&self) -> u8 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u8 {
        self.config.max_health
    }

    #[must_use]
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    #[must_use]
    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    #[must_use]
    pub fn remaining_monsters(&self) -> u32 {
        self.remaining_monsters
    }

    #[must_use]
    pub fn can_drink_potion(&self) -> bool {
        self.can_drink_potion
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn log_lines(&self) -> &Vector<String> {
        &self.log
    }

    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    // === Turn gates ===

    /// Reject anything but a new game once the run has ended.
    pub fn ensure_active(&self) -> Result<(), RuleViolation> {
        if self.is_over() {
            return Err(RuleViolation::GameAlreadyOver);
        }
        Ok(())
    }

    /// Reject cards that are not in the current room.
    pub fn ensure_in_room(&self, card: Card) -> Result<(), RuleViolation> {
        if !self.dungeon.in_room(card) {
            return Err(RuleViolation::CardNotInRoom(card));
        }
        Ok(())
    }

    // === Mutation (used by the rules) ===

    /// Apply damage. Returns `false` if it was fatal.
    pub(crate) fn take_damage(&mut self, amount: u8) -> bool {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.end(Outcome::Lost);
            return false;
        }
        true
    }

    /// Heal up to `amount`, capped at max health. Returns health restored.
    pub(crate) fn heal(&mut self, amount: u8) -> u8 {
        let restored = amount.min(self.config.max_health - self.health);
        self.health += restored;
        restored
    }

    /// Close the potion gate for the rest of the room.
    pub(crate) fn close_potion_gate(&mut self) {
        self.can_drink_potion = false;
    }

    /// Move a played card out of the room, handling carry-over.
    pub(crate) fn play_card(&mut self, card: Card) -> Result<Option<RoomTransition>, RuleViolation> {
        let transition = self.dungeon.play_card(card)?;
        if transition.is_some() {
            self.can_drink_potion = true;
        }
        Ok(transition)
    }

    /// Flee the current room.
    pub(crate) fn run(&mut self) -> Result<RoomTransition, RuleViolation> {
        let transition = self.dungeon.run()?;
        self.can_drink_potion = true;
        Ok(transition)
    }

    /// Count a defeated monster and check for victory.
    pub(crate) fn defeat_monster(&mut self) {
        self.remaining_monsters = self.remaining_monsters.saturating_sub(1);
        if self.remaining_monsters == 0 {
            self.log("You defeated all monsters! You win!");
            self.end(Outcome::Won);
        }
    }

    fn end(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.dungeon.disable_run();
    }

    pub(crate) fn log(&mut self, line: impl Into<String>) {
        self.log.push_back(line.into());
    }

    /// Record a successful command in the history.
    pub(crate) fn record(&mut self, command: Command, room: u32) {
        let record = CommandRecord::new(command, room, self.next_sequence);
        self.next_sequence += 1;
        self.history.push_back(record);
    }

    /// Take a read-only snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            health: self.health,
            max_health: self.config.max_health,
            deck: self.dungeon.deck().clone(),
            room: Room::from_slice(self.dungeon.room()),
            weapon: self.weapon.clone(),
            remaining_monsters: self.remaining_monsters,
            can_run: self.dungeon.can_run(),
            can_drink_potion: self.can_drink_potion,
            outcome: self.outcome,
            room_number: self.dungeon.room_number(),
        }
    }
}

/// Read-only view of a session for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub health: u8,
    pub max_health: u8,
    /// Deck, front (next drawn) first.
    pub deck: Vector<Card>,
    pub room: Room,
    /// Equipped weapon, including its chain.
    pub weapon: Option<Weapon>,
    pub remaining_monsters: u32,
    pub can_run: bool,
    pub can_drink_potion: bool,
    pub outcome: Outcome,
    pub room_number: u32,
}

impl Snapshot {
    /// Monsters slain with the current weapon, oldest first.
    #[must_use]
    pub fn weapon_chain(&self) -> &[Card] {
        self.weapon.as_ref().map_or(&[], |w| w.chain.as_slice())
    }

    /// Encode for transport to another process.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
