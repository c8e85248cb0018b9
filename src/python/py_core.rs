//! Card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Card, Suit};
use crate::core::RuleViolation;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Copy, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card.
    ///
    /// # Arguments
    /// - suit: "spade", "club", "heart" or "diamond" (or the suit symbol)
    /// - value: 2 (Two) to 14 (Ace)
    #[new]
    fn new(suit: &str, value: u8) -> PyResult<Self> {
        Ok(Self(Card::new(parse_suit(suit)?, value)))
    }

    #[getter]
    fn suit(&self) -> &'static str {
        suit_name(self.0.suit)
    }

    #[getter]
    fn value(&self) -> u8 {
        self.0.value
    }

    /// "Monster", "Weapon" or "Potion".
    #[getter]
    fn role(&self) -> String {
        self.0.role().to_string()
    }

    #[getter]
    fn title(&self) -> String {
        self.0.title()
    }

    #[getter]
    fn description(&self) -> String {
        self.0.description()
    }

    fn __str__(&self) -> String {
        self.0.face()
    }

    fn __repr__(&self) -> String {
        format!("Card({}, {})", suit_name(self.0.suit), self.0.value)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.suit as u64) << 8) | u64::from(self.0.value)
    }
}

fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Spade => "spade",
        Suit::Club => "club",
        Suit::Heart => "heart",
        Suit::Diamond => "diamond",
    }
}

fn parse_suit(name: &str) -> PyResult<Suit> {
    match name.trim().to_lowercase().trim_end_matches('s') {
        "spade" | "♠" => Ok(Suit::Spade),
        "club" | "♣" => Ok(Suit::Club),
        "heart" | "♥" => Ok(Suit::Heart),
        "diamond" | "♦" => Ok(Suit::Diamond),
        other => Err(PyValueError::new_err(format!("unknown suit: {other}"))),
    }
}

/// Rule violations surface as `ValueError` with the player-facing message.
pub(crate) fn violation_to_py(err: RuleViolation) -> PyErr {
    PyValueError::new_err(err.to_string())
}
