//! Python bindings for the Scoundrel rules engine.
//!
//! Exposes a `Session` for scripting bots and notebooks.
//!
//! # Quick Start
//!
//! ```python
//! import rust_scoundrel as sc
//!
//! session = sc.Session(seed=42)
//! print(session.room)
//!
//! for command in session.legal_commands():
//!     print(command)
//!
//! monster = next(c for c in session.room if c.role == "Monster")
//! session.fight(monster)
//! print(session.health, session.log[-1])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust_scoundrel: rules engine for the Scoundrel solitaire card game.
#[pymodule]
fn rust_scoundrel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySession>()?;
    Ok(())
}
