//! Turn representation: origin, destination, style, and acting player.
//!
//! A `Turn` is a proposal. Agents produce them, the engine consumes them once
//! and either applies or rejects them. Applied turns are kept in the engine's
//! move log as `TurnRecord`s.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::StyleName;

/// A proposed move.
///
/// ## Example
///
/// ```
/// use rust_onitama::cards::StyleName;
/// use rust_onitama::core::{PlayerId, Turn};
///
/// // Player A steps the grandmaster forward with the crab.
/// let turn = Turn::new((0, 2), (1, 2), StyleName::Crab, PlayerId::A);
/// assert_eq!(turn.origin(), (0, 2));
/// assert_eq!(turn.destination(), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub row_o: i32,
    pub col_o: i32,
    pub row_d: i32,
    pub col_d: i32,

    /// Style card used for the move.
    pub style: StyleName,

    /// Who is proposing the move.
    pub player: PlayerId,
}

impl Turn {
    /// Create a turn from origin and destination coordinates.
    #[must_use]
    pub const fn new(
        origin: (i32, i32),
        destination: (i32, i32),
        style: StyleName,
        player: PlayerId,
    ) -> Self {
        Self {
            row_o: origin.0,
            col_o: origin.1,
            row_d: destination.0,
            col_d: destination.1,
            style,
            player,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> (i32, i32) {
        (self.row_o, self.col_o)
    }

    #[must_use]
    pub const fn destination(&self) -> (i32, i32) {
        (self.row_d, self.col_d)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ({}, {}) -> ({}, {}) with {}",
            self.player, self.row_o, self.col_o, self.row_d, self.col_d, self.style
        )
    }
}

/// An applied turn with its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The turn that was applied.
    pub turn: Turn,

    /// Number of moves applied before this one (0 for the first move).
    pub ply: u32,
}

impl TurnRecord {
    #[must_use]
    pub const fn new(turn: Turn, ply: u32) -> Self {
        Self { turn, ply }
    }
}
