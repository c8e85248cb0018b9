//! The game session.
//!
//! ## Key Types
//!
//! - `Session`: Owns one run and is the only way to mutate it

pub mod controller;

pub use controller::Session;
