//! Deck construction.
//!
//! The dungeon is a standard 52-card deck with the red face cards and aces
//! removed. Easy mode keeps them, giving the player stronger weapons and
//! potions.

use crate::core::rng::GameRng;

use super::card::{Card, CardRole, Suit, MAX_NORMAL_SUPPORT_VALUE, MAX_VALUE, MIN_VALUE};

/// Whether a card belongs in the dungeon for the given mode.
#[must_use]
pub fn in_population(card: Card, easy_mode: bool) -> bool {
    match card.role() {
        CardRole::Monster => true,
        CardRole::Weapon | CardRole::Potion => easy_mode || card.value <= MAX_NORMAL_SUPPORT_VALUE,
    }
}

/// Build the unshuffled card population, value-major.
#[must_use]
pub fn build_population(easy_mode: bool) -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for value in MIN_VALUE..=MAX_VALUE {
        for suit in Suit::ALL {
            let card = Card::new(suit, value);
            if in_population(card, easy_mode) {
                cards.push(card);
            }
        }
    }
    cards
}

/// Build and shuffle a fresh dungeon deck.
#[must_use]
pub fn build_deck(easy_mode: bool, rng: &mut GameRng) -> Vec<Card> {
    let mut cards = build_population(easy_mode);
    rng.shuffle(&mut cards);
    cards
}

/// Count of cards per role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    pub monsters: usize,
    pub weapons: usize,
    pub potions: usize,
}

impl Composition {
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        cards.iter().fold(Self::default(), |mut acc, card| {
            match card.role() {
                CardRole::Monster => acc.monsters += 1,
                CardRole::Weapon => acc.weapons += 1,
                CardRole::Potion => acc.potions += 1,
            }
            acc
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.monsters + self.weapons + self.potions
    }
}
