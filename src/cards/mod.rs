//! Card model: identity, role, weapon payload, and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (suit, value) pair
//! - `CardRole`: Monster / Weapon / Potion, derived from the suit
//! - `Weapon`: An equipped diamond with durability and a kill chain
//! - `Composition`: Role counts for a set of cards

pub mod card;
pub mod deck;
pub mod weapon;

pub use card::{Card, CardRole, Suit, MAX_VALUE, MIN_VALUE};
pub use deck::{build_deck, build_population, Composition};
pub use weapon::Weapon;
