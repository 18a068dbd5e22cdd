//! Player identification, per-player data storage, and player queries.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats: `PlayerId::A` starts on row 0,
//! `PlayerId::B` starts on the last row.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## Player
//!
//! An identity record. Queries take the engine as an explicit argument, so a
//! player never holds a reference into game state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::StyleCard;
use crate::rules::{GameEngine, ValidTurns};

/// Player identifier.
///
/// Only `PlayerId::A` and `PlayerId::B` are registered with an engine; any
/// other value is an unknown identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player starting on row 0 (tokens `x` / `X`).
    pub const A: PlayerId = PlayerId(0);

    /// The player starting on the last row (tokens `y` / `Y`).
    pub const B: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is one of the two seats of a game.
    #[must_use]
    pub const fn is_registered(self) -> bool {
        self.0 < 2
    }

    /// Iterate over both registered players, A first.
    ///
    /// ```
    /// use rust_onitama::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::A, PlayerId::B]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::A, PlayerId::B].into_iter()
    }

    /// Glyph used for this player's grandmaster in text output.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self.0 {
            0 => 'X',
            1 => 'Y',
            _ => '?',
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.glyph())
    }
}

/// Per-player data storage with O(1) access.
///
/// Holds one entry for each registered player. Use `PlayerMap::new()` with a
/// factory function, or `PlayerMap::with_value()` to give both the same value.
///
/// ## Example
///
/// ```
/// use rust_onitama::core::{PlayerId, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::with_value(0);
/// captures[PlayerId::B] += 1;
///
/// assert_eq!(captures[PlayerId::A], 0);
/// assert_eq!(captures[PlayerId::B], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::both().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    ///
    /// Panics if `player` is not registered.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    ///
    /// Panics if `player` is not registered.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat at the table.
///
/// Carries identity only. Every query borrows the engine for its duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// This player's identity.
    pub id: PlayerId,
}

impl Player {
    /// Create a player record.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self { id }
    }

    /// Board coordinates holding one of this player's tokens, row-major.
    #[must_use]
    pub fn tokens(&self, engine: &GameEngine) -> Vec<(i32, i32)> {
        engine.board().tokens_of(self.id)
    }

    /// Copies of the styles this player currently owns.
    #[must_use]
    pub fn styles(&self, engine: &GameEngine) -> Vec<StyleCard> {
        engine.board().styles_of(self.id).cloned().collect()
    }

    /// Legal turns for this player, grouped by style.
    ///
    /// Legality is judged by the engine, so a player who is not on the move
    /// gets empty lists.
    #[must_use]
    pub fn valid_turns(&self, engine: &GameEngine) -> ValidTurns {
        ValidTurns::collect(engine, self.id)
    }
}

impl From<PlayerId> for Player {
    fn from(id: PlayerId) -> Self {
        Self::new(id)
    }
}
