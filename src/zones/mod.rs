//! Card zones for the dungeon.
//!
//! ## Key Types
//!
//! - `Dungeon`: Deck, room, and discard with draw / play / run
//! - `DeckPosition`: Front or back insertion into the deck
//! - `RoomTransition`: How a room was replaced (carry-over or flight)

pub mod dungeon;

pub use dungeon::{DeckPosition, Dungeon, Room, RoomTransition};
