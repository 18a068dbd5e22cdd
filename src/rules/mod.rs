//! Game rules.
//!
//! [`GameEngine`] owns the board, whose turn it is, and the undo history. It
//! is the only place moves are validated and applied. [`turns`] holds the
//! facing convention shared by validation and enumeration.

pub mod engine;
pub mod turns;

pub use engine::GameEngine;
pub use turns::{destination, required_offset, ValidTurns};
