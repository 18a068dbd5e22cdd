//! Core types: players, tokens, turns, configuration, errors, RNG.
//!
//! Everything here is plain data. The board and the engine build on these.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod token;

pub use action::{Turn, TurnRecord};
pub use config::{validate_board_size, GameConfig, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{OnitamaError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use token::{parse_grid, Grid, Token};
