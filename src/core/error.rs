//! Error types.
//!
//! Only construction and parsing fail with an error. Rejected moves,
//! out-of-bounds reads and empty undos are ordinary outcomes and are reported
//! as `bool` / `Option` by the operations themselves.

use thiserror::Error;

/// Errors raised while building boards, configs, or parsing fixtures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OnitamaError {
    #[error("board size {size} is invalid: must be odd and at least 5")]
    InvalidBoardSize { size: usize },

    #[error("grid must be {expected}x{expected}, found {rows} rows with a row of length {width}")]
    GridShape {
        expected: usize,
        rows: usize,
        width: usize,
    },

    #[error("player {0} is not one of the two seats")]
    UnknownPlayer(u8),

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("invalid token character {0:?}")]
    InvalidToken(char),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OnitamaError>;
