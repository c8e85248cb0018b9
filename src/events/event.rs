//! State-changed events.
//!
//! One event per logical field of the session. After each command the
//! session compares the snapshot it took before with the one after and
//! emits an event for every field that differs, carrying the new value.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Weapon};
use crate::core::state::{Outcome, Snapshot};
use crate::zones::Room;

/// Observable session fields. Subscriptions are keyed by these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateField {
    Health,
    Deck,
    Room,
    Weapon,
    Chain,
    RemainingMonsters,
    CanRun,
    CanDrinkPotion,
    Outcome,
    Log,
}

impl StateField {
    pub const ALL: [StateField; 10] = [
        StateField::Health,
        StateField::Deck,
        StateField::Room,
        StateField::Weapon,
        StateField::Chain,
        StateField::RemainingMonsters,
        StateField::CanRun,
        StateField::CanDrinkPotion,
        StateField::Outcome,
        StateField::Log,
    ];
}

/// A field changed; the payload is its new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateEvent {
    Health(u8),
    /// Deck, front first.
    Deck(Vector<Card>),
    Room(Room),
    /// Weapon identity or durability changed (chain changes are separate).
    Weapon(Option<Weapon>),
    Chain(Vec<Card>),
    RemainingMonsters(u32),
    CanRun(bool),
    CanDrinkPotion(bool),
    Outcome(Outcome),
    /// A new adventure log line.
    Log(String),
}

impl StateEvent {
    /// The field this event reports on.
    #[must_use]
    pub fn field(&self) -> StateField {
        match self {
            StateEvent::Health(_) => StateField::Health,
            StateEvent::Deck(_) => StateField::Deck,
            StateEvent::Room(_) => StateField::Room,
            StateEvent::Weapon(_) => StateField::Weapon,
            StateEvent::Chain(_) => StateField::Chain,
            StateEvent::RemainingMonsters(_) => StateField::RemainingMonsters,
            StateEvent::CanRun(_) => StateField::CanRun,
            StateEvent::CanDrinkPotion(_) => StateField::CanDrinkPotion,
            StateEvent::Outcome(_) => StateField::Outcome,
            StateEvent::Log(_) => StateField::Log,
        }
    }

    /// Events for every field that differs between two snapshots, in
    /// `StateField` order, followed by one `Log` event per new line.
    #[must_use]
    pub fn diff(before: &Snapshot, after: &Snapshot, new_lines: &[String]) -> Vec<StateEvent> {
        let mut events = Vec::new();

        if before.health != after.health {
            events.push(StateEvent::Health(after.health));
        }
        if before.deck != after.deck {
            events.push(StateEvent::Deck(after.deck.clone()));
        }
        if before.room != after.room {
            events.push(StateEvent::Room(after.room.clone()));
        }
        if weapon_identity(before.weapon.as_ref()) != weapon_identity(after.weapon.as_ref()) {
            events.push(StateEvent::Weapon(after.weapon.clone()));
        }
        if before.weapon_chain() != after.weapon_chain() {
            events.push(StateEvent::Chain(after.weapon_chain().to_vec()));
        }
        if before.remaining_monsters != after.remaining_monsters {
            events.push(StateEvent::RemainingMonsters(after.remaining_monsters));
        }
        if before.can_run != after.can_run {
            events.push(StateEvent::CanRun(after.can_run));
        }
        if before.can_drink_potion != after.can_drink_potion {
            events.push(StateEvent::CanDrinkPotion(after.can_drink_potion));
        }
        if before.outcome != after.outcome {
            events.push(StateEvent::Outcome(after.outcome));
        }
        events.extend(new_lines.iter().cloned().map(StateEvent::Log));

        events
    }

    /// Events describing a whole snapshot, for a freshly dealt game.
    #[must_use]
    pub fn full(snapshot: &Snapshot, new_lines: &[String]) -> Vec<StateEvent> {
        let mut events = vec![
            StateEvent::Health(snapshot.health),
            StateEvent::Deck(snapshot.deck.clone()),
            StateEvent::Room(snapshot.room.clone()),
            StateEvent::Weapon(snapshot.weapon.clone()),
            StateEvent::Chain(snapshot.weapon_chain().to_vec()),
            StateEvent::RemainingMonsters(snapshot.remaining_monsters),
            StateEvent::CanRun(snapshot.can_run),
            StateEvent::CanDrinkPotion(snapshot.can_drink_potion),
            StateEvent::Outcome(snapshot.outcome),
        ];
        events.extend(new_lines.iter().cloned().map(StateEvent::Log));
        events
    }
}

/// The parts of a weapon the `Weapon` field reports on.
fn weapon_identity(weapon: Option<&Weapon>) -> Option<(Card, u8, bool)> {
    weapon.map(|w| (w.card, w.durability, w.equipped))
}
