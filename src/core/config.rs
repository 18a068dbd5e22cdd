//! Game configuration.
//!
//! `GameConfig` fixes the board size and the opening player. It is checked
//! once when an engine is built; an invalid size is a construction fault.

use serde::{Deserialize, Serialize};

use super::error::{OnitamaError, Result};
use super::player::PlayerId;

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 5;

/// Board side length used by the standard game.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Check that a board side length is odd and at least `MIN_BOARD_SIZE`.
pub fn validate_board_size(size: usize) -> Result<()> {
    if size % 2 == 0 || size < MIN_BOARD_SIZE {
        return Err(OnitamaError::InvalidBoardSize { size });
    }
    Ok(())
}

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use rust_onitama::core::{GameConfig, PlayerId};
///
/// let config = GameConfig::new()
///     .with_board_size(7)
///     .with_first_player(PlayerId::B);
///
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new().with_board_size(6).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board. Odd, at least 5.
    pub board_size: usize,

    /// Who moves first.
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: PlayerId::A,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration (5x5, player A opens).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the opening player.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> Result<()> {
        validate_board_size(self.board_size)?;
        if !self.first_player.is_registered() {
            return Err(OnitamaError::UnknownPlayer(self.first_player.0));
        }
        Ok(())
    }
}
