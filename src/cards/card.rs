//! Card identity and derived role.
//!
//! A `Card` is a (suit, value) pair and nothing else. Its role in the
//! dungeon (monster, weapon, potion) is derived from the suit, so a card
//! never changes role and two cards with the same suit and value are the
//! same card.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest card value in the deck (Two).
pub const MIN_VALUE: u8 = 2;

/// Highest card value in the deck (Ace).
pub const MAX_VALUE: u8 = 14;

/// Highest diamond/heart value dealt outside easy mode.
pub const MAX_NORMAL_SUPPORT_VALUE: u8 = 10;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    /// The role every card of this suit plays.
    #[must_use]
    pub const fn role(self) -> CardRole {
        match self {
            Suit::Spade | Suit::Club => CardRole::Monster,
            Suit::Diamond => CardRole::Weapon,
            Suit::Heart => CardRole::Potion,
        }
    }

    /// Suit symbol used on card faces.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spade => "♠",
            Suit::Club => "♣",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
        }
    }

    /// Plural suit name, as used in card titles ("of Spades").
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            Suit::Spade => "Spades",
            Suit::Club => "Clubs",
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
        }
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRole {
    /// Spades and clubs. Must be fought.
    Monster,
    /// Diamonds. Can be equipped.
    Weapon,
    /// Hearts. Can be drunk.
    Potion,
}

impl fmt::Display for CardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardRole::Monster => "Monster",
            CardRole::Weapon => "Weapon",
            CardRole::Potion => "Potion",
        };
        f.write_str(name)
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use rust_scoundrel::cards::{Card, CardRole, Suit};
///
/// let card = Card::new(Suit::Spade, 11);
/// assert_eq!(card.role(), CardRole::Monster);
/// assert_eq!(card.title(), "Jack of Spades");
/// assert_eq!(card.to_string(), "J♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Values outside 2..=14 are accepted so tests can build odd rooms,
    /// but the deck builder never produces them.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    /// Derived role.
    #[must_use]
    pub const fn role(self) -> CardRole {
        self.suit.role()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.role(), CardRole::Monster)
    }

    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(self.role(), CardRole::Weapon)
    }

    #[must_use]
    pub const fn is_potion(self) -> bool {
        matches!(self.role(), CardRole::Potion)
    }

    /// Full title, e.g. "Queen of Hearts".
    #[must_use]
    pub fn title(self) -> String {
        format!("{} of {}", value_name(self.value), self.suit.plural_name())
    }

    /// Short face label, e.g. "10♦" or "A♣".
    #[must_use]
    pub fn face(self) -> String {
        format!("{}{}", value_label(self.value), self.suit.symbol())
    }

    /// Rules text for the card's role.
    #[must_use]
    pub fn description(self) -> String {
        let v = self.value;
        match self.role() {
            CardRole::Monster => format!(
                "Deals {v} damage. Weapon needs at least {} durability to be used. \
                 Reduces weapon durability to {v}.",
                u16::from(v) + 1
            ),
            CardRole::Weapon => format!(
                "Deals {v} attack to a monster. Durability will be reduced when used with a monster."
            ),
            CardRole::Potion => format!(
                "Restores up to {v} health. Potions can only be used once per room."
            ),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.face())
    }
}

/// Spelled-out value name ("Two" .. "Ace").
#[must_use]
pub fn value_name(value: u8) -> String {
    let name = match value {
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        14 => "Ace",
        other => return other.to_string(),
    };
    name.to_string()
}

/// Face label: numerals up to ten, then J/Q/K/A.
#[must_use]
pub fn value_label(value: u8) -> String {
    match value {
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        14 => "A".to_string(),
        n => n.to_string(),
    }
}
