//! Session controller.
//!
//! `Session` owns the configuration, the random stream, the game state and
//! the observer registry. Every command goes through `apply`, which runs
//! the matching resolver, records the command in the history and publishes
//! one event per field that changed.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::cards::Card;
use crate::core::command::{Command, CommandRecord, FightMode};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::error::RuleViolation;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Outcome, Snapshot};
use crate::events::{EventBus, StateEvent, StateField, StateObserver, SubscriptionId};
use crate::rules::{self, Report};

/// One adventurer's run through the dungeon.
///
/// ## Example
///
/// ```
/// use rust_scoundrel::core::{Command, GameConfig, Outcome};
/// use rust_scoundrel::session::Session;
///
/// let mut session = Session::with_config(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(session.snapshot().room.len(), 4);
///
/// session.apply(Command::Run).unwrap();
/// assert!(!session.snapshot().can_run);
/// assert_eq!(session.outcome(), Outcome::Active);
/// ```
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    bus: EventBus,
}

impl Session {
    /// Start a game with the default configuration and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        let config = GameConfig::default();
        let mut rng = GameRng::from_seed(config.seed);
        let state = GameState::shuffled(config.clone(), &mut rng);
        Self {
            config,
            rng,
            state,
            bus: EventBus::new(),
        }
    }

    /// Start a game with a custom configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::from_seed(config.seed);
        let state = GameState::shuffled(config.clone(), &mut rng);
        Ok(Self {
            config,
            rng,
            state,
            bus: EventBus::new(),
        })
    }

    /// Wrap an already dealt state, e.g. a stacked dungeon.
    ///
    /// The state's configuration was validated when it was dealt.
    /// Later `new_game` calls shuffle with the state's configured seed.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let config = state.config().clone();
        Self {
            rng: GameRng::from_seed(config.seed),
            config,
            state,
            bus: EventBus::new(),
        }
    }

    // === Commands ===

    /// Apply any command.
    ///
    /// On success the command is recorded and observers are notified. On
    /// failure nothing changes and nobody is notified.
    pub fn apply(&mut self, command: Command) -> Result<Report, RuleViolation> {
        let before = self.tracking().then(|| self.state.snapshot());
        let log_len = self.state.log_lines().len();
        let room = self.state.dungeon().room_number();

        let report = match command {
            Command::NewGame { easy_mode } => return Ok(self.deal(easy_mode)),
            Command::Fight { card, mode } => Report::Fight(rules::fight(&mut self.state, card, mode)?),
            Command::Equip(card) => Report::Equip(rules::equip(&mut self.state, card)?),
            Command::Drink(card) => Report::Drink(rules::drink(&mut self.state, card)?),
            Command::Run => {
                rules::run(&mut self.state)?;
                Report::Run
            }
        };

        self.state.record(command, room);
        if let Some(before) = before {
            let lines = self.new_lines(log_len);
            let events = StateEvent::diff(&before, &self.state.snapshot(), &lines);
            self.bus.publish(&events);
        }
        Ok(report)
    }

    /// Throw away the current run and deal a new dungeon. Always accepted.
    pub fn new_game(&mut self, easy_mode: bool) -> Result<Report, RuleViolation> {
        self.apply(Command::NewGame { easy_mode })
    }

    pub fn fight(&mut self, card: Card, mode: FightMode) -> Result<Report, RuleViolation> {
        self.apply(Command::Fight { card, mode })
    }

    pub fn equip(&mut self, card: Card) -> Result<Report, RuleViolation> {
        self.apply(Command::Equip(card))
    }

    pub fn drink(&mut self, card: Card) -> Result<Report, RuleViolation> {
        self.apply(Command::Drink(card))
    }

    pub fn run(&mut self) -> Result<Report, RuleViolation> {
        self.apply(Command::Run)
    }

    fn deal(&mut self, easy_mode: bool) -> Report {
        self.config = self.config.clone().with_easy_mode(easy_mode);
        self.state = GameState::shuffled(self.config.clone(), &mut self.rng);
        let room = self.state.dungeon().room_number();
        self.state.record(Command::NewGame { easy_mode }, room);

        if self.tracking() {
            let lines = self.new_lines(0);
            let events = StateEvent::full(&self.state.snapshot(), &lines);
            self.bus.publish(&events);
        }
        Report::NewGame
    }

    fn tracking(&self) -> bool {
        !self.bus.is_empty()
    }

    fn new_lines(&self, from: usize) -> Vec<String> {
        self.state.log_lines().iter().skip(from).cloned().collect()
    }

    // === Queries ===

    /// Commands that would currently succeed, `NewGame` excepted.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        rules::legal_commands(&self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session's random stream, for replaying a dungeon.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Cards still in the deck or the room.
    #[must_use]
    pub fn remaining_cards(&self) -> FxHashSet<Card> {
        self.state.dungeon().remaining_cards()
    }

    /// Adventure log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        self.state.log_lines()
    }

    /// Successful commands of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        self.state.history()
    }

    // === Observers ===

    /// Be notified whenever `field` changes.
    pub fn subscribe<O>(&mut self, field: StateField, observer: O) -> SubscriptionId
    where
        O: StateObserver + 'static,
    {
        self.bus.subscribe(field, observer)
    }

    /// Be notified of every change.
    pub fn subscribe_all<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: StateObserver + 'static,
    {
        self.bus.subscribe_all(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
