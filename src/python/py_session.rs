//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{FightMode, GameConfig, Outcome};
use crate::session::Session;

use super::py_core::{violation_to_py, PyCard};

/// Python wrapper for Session.
///
/// Commands raise `ValueError` when the rules reject them; the message is
/// the one a player would see.
#[pyclass(name = "Session")]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    /// Deal a new dungeon.
    ///
    /// # Arguments
    /// - easy_mode: deal diamonds and hearts up to the Ace
    /// - seed: RNG seed for a reproducible dungeon (None for entropy)
    #[new]
    #[pyo3(signature = (easy_mode = false, seed = None))]
    fn new(easy_mode: bool, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::default().with_easy_mode(easy_mode);
        config.seed = seed;
        let session =
            Session::with_config(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    #[pyo3(signature = (easy_mode = false))]
    fn new_game(&mut self, easy_mode: bool) -> PyResult<()> {
        self.session.new_game(easy_mode).map_err(violation_to_py)?;
        Ok(())
    }

    /// Fight a monster in the room, with the equipped weapon if asked.
    #[pyo3(signature = (card, with_weapon = false))]
    fn fight(&mut self, card: &PyCard, with_weapon: bool) -> PyResult<()> {
        let mode = if with_weapon {
            FightMode::WeaponAssisted
        } else {
            FightMode::Barehanded
        };
        self.session.fight(card.0, mode).map_err(violation_to_py)?;
        Ok(())
    }

    fn equip(&mut self, card: &PyCard) -> PyResult<()> {
        self.session.equip(card.0).map_err(violation_to_py)?;
        Ok(())
    }

    fn drink(&mut self, card: &PyCard) -> PyResult<()> {
        self.session.drink(card.0).map_err(violation_to_py)?;
        Ok(())
    }

    fn run(&mut self) -> PyResult<()> {
        self.session.run().map_err(violation_to_py)?;
        Ok(())
    }

    /// Currently legal commands, as text ("fight 5♠ barehanded", "run").
    fn legal_commands(&self) -> Vec<String> {
        self.session
            .legal_commands()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Snapshot encoded with bincode.
    fn snapshot_bytes(&self) -> PyResult<Vec<u8>> {
        self.session
            .snapshot()
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn health(&self) -> u8 {
        self.session.state().health()
    }

    #[getter]
    fn max_health(&self) -> u8 {
        self.session.state().max_health()
    }

    #[getter]
    fn deck(&self) -> Vec<PyCard> {
        self.session.state().dungeon().deck().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn room(&self) -> Vec<PyCard> {
        self.session.state().dungeon().room().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn weapon(&self) -> Option<PyCard> {
        self.session.state().weapon().map(|w| PyCard(w.card))
    }

    #[getter]
    fn durability(&self) -> Option<u8> {
        self.session.state().weapon().map(|w| w.durability)
    }

    #[getter]
    fn chain(&self) -> Vec<PyCard> {
        self.session
            .state()
            .weapon()
            .map(|w| w.chain.iter().copied().map(PyCard).collect())
            .unwrap_or_default()
    }

    #[getter]
    fn remaining_monsters(&self) -> u32 {
        self.session.state().remaining_monsters()
    }

    #[getter]
    fn can_run(&self) -> bool {
        self.session.state().dungeon().can_run()
    }

    #[getter]
    fn can_drink_potion(&self) -> bool {
        self.session.state().can_drink_potion()
    }

    #[getter]
    fn room_number(&self) -> u32 {
        self.session.state().dungeon().room_number()
    }

    /// "active", "won" or "lost".
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.session.outcome() {
            Outcome::Active => "active",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }

    #[getter]
    fn log(&self) -> Vec<String> {
        self.session.log().iter().cloned().collect()
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "Session(health={}, room={}, remaining_monsters={}, outcome={})",
            state.health(),
            state.dungeon().room_number(),
            state.remaining_monsters(),
            self.outcome()
        )
    }
}
