//! Dungeon zones: deck, room, and discard pile.
//!
//! Every card in a session lives in exactly one of three zones:
//! - **deck**: ordered, front is drawn next
//! - **room**: the up to four face-up cards the player may act on
//! - **discard**: cards that have been played, in play order
//!
//! The `Dungeon` moves cards between them and owns the room-level run
//! flag. The potion gate belongs to the session, so room transitions are
//! reported back to the caller instead of being handled here.

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::RuleViolation;

/// Cards in the current room. Never more than four.
pub type Room = SmallVec<[Card; 4]>;

/// Where a card is inserted into the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckPosition {
    /// Drawn next.
    Front,
    /// Drawn last.
    Back,
}

/// How the room was replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomTransition {
    /// The room was cleared down to one card, which was carried into the
    /// next room.
    CarryOver(Card),
    /// The player fled; the old room went to the bottom of the deck.
    Fled,
}

/// Card zones for one session.
///
/// ## Usage
///
/// ```
/// use rust_scoundrel::cards::{Card, Suit};
/// use rust_scoundrel::zones::Dungeon;
///
/// let cards = (2..=7).map(|v| Card::new(Suit::Spade, v)).collect();
/// let mut dungeon = Dungeon::new(cards, 4);
/// dungeon.draw_room();
///
/// assert_eq!(dungeon.room().len(), 4);
/// assert_eq!(dungeon.deck().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Dungeon {
    deck: Vector<Card>,
    room: Room,
    discard: Vec<Card>,
    room_size: usize,
    can_run: bool,
    /// Rooms dealt so far (the current room's number).
    room_number: u32,
    population: usize,
}

impl Dungeon {
    /// Create a dungeon from an already shuffled deck. No room is dealt.
    #[must_use]
    pub fn new(cards: Vec<Card>, room_size: usize) -> Self {
        let population = cards.len();
        Self {
            deck: cards.into_iter().collect(),
            room: Room::new(),
            discard: Vec::new(),
            room_size,
            can_run: true,
            room_number: 0,
            population,
        }
    }

    /// Deck, front first.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn room(&self) -> &[Card] {
        &self.room
    }

    /// Played cards, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn can_run(&self) -> bool {
        self.can_run
    }

    #[must_use]
    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    /// Number of cards the session started with.
    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Check if a card is in the current room.
    #[must_use]
    pub fn in_room(&self, card: Card) -> bool {
        self.room.contains(&card)
    }

    /// Cards not yet played: everything in the deck or the room.
    #[must_use]
    pub fn remaining_cards(&self) -> FxHashSet<Card> {
        self.deck.iter().chain(self.room.iter()).copied().collect()
    }

    /// Insert a card into the deck.
    pub fn insert(&mut self, card: Card, position: DeckPosition) {
        match position {
            DeckPosition::Front => self.deck.push_front(card),
            DeckPosition::Back => self.deck.push_back(card),
        }
    }

    /// Deal up to `room_size` cards from the deck front into the room.
    ///
    /// Returns the number of cards dealt. A short deck deals a short room.
    pub fn draw_room(&mut self) -> usize {
        debug_assert!(self.room.is_empty(), "draw_room over a live room");
        let mut dealt = 0;
        while dealt < self.room_size {
            match self.deck.pop_front() {
                Some(card) => self.room.push(card),
                None => break,
            }
            dealt += 1;
        }
        self.room_number += 1;
        dealt
    }

    /// Remove a played card from the room.
    ///
    /// Disables running for the rest of the room. If exactly one card is
    /// left it is carried over: put back on the deck front and a new room
    /// is dealt starting with it.
    pub fn play_card(&mut self, card: Card) -> Result<Option<RoomTransition>, RuleViolation> {
        let index = self
            .room
            .iter()
            .position(|&c| c == card)
            .ok_or(RuleViolation::CardNotInRoom(card))?;

        self.room.remove(index);
        self.discard.push(card);
        self.can_run = false;

        if self.room.len() == 1 {
            let carried = self.room[0];
            self.room.clear();
            self.insert(carried, DeckPosition::Front);
            self.draw_room();
            self.can_run = true;
            return Ok(Some(RoomTransition::CarryOver(carried)));
        }

        Ok(None)
    }

    /// Flee the room: it goes to the bottom of the deck and a new room is
    /// dealt. Two runs in a row are not allowed.
    pub fn run(&mut self) -> Result<RoomTransition, RuleViolation> {
        if !self.can_run {
            return Err(RuleViolation::CannotRunNow);
        }

        for card in self.room.drain(..) {
            self.deck.push_back(card);
        }
        self.draw_room();
        self.can_run = false;

        Ok(RoomTransition::Fled)
    }

    /// Close the run option, e.g. when the game ends.
    pub fn disable_run(&mut self) {
        self.can_run = false;
    }
}
