//! # rust-onitama
//!
//! A rules engine for Onitama, the two-player abstract strategy game.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns State**: Only `GameEngine` mutates the board, the style
//!    cards, or the undo history. Everything it hands out is a copy.
//!
//! 2. **Reject, Don't Panic**: An illegal move returns `false` and leaves the
//!    game untouched. Construction faults are `OnitamaError`s.
//!
//! 3. **Players Are Identities**: Move choice lives in `TurnSelector`
//!    implementations that read the engine; the engine validates whatever
//!    they propose.
//!
//! ## Modules
//!
//! - `core`: Players, tokens, turns, configuration, errors, RNG
//! - `cards`: Style cards and the standard style set
//! - `board`: Token grid, style ownership, text rendering
//! - `history`: Snapshot stack backing undo
//! - `rules`: `GameEngine` and legal-turn enumeration
//! - `agents`: `TurnSelector` and the built-in agents
//! - `play`: Match driver
//!
//! ## Example
//!
//! ```
//! use rust_onitama::{GameEngine, Player, PlayerId, StyleName};
//!
//! let mut game = GameEngine::default();
//! let turns = Player::new(PlayerId::A).valid_turns(&game);
//! assert_eq!(turns.len(), 10);
//!
//! let turn = turns.get(StyleName::Horse)[0];
//! assert!(game.apply_turn(&turn));
//! assert_eq!(game.whose_turn(), PlayerId::B);
//! assert_eq!(game.get_winner(), None);
//! ```

pub mod agents;
pub mod board;
pub mod cards;
pub mod core;
pub mod history;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, Grid, OnitamaError, Player, PlayerId, PlayerMap, Result, Token, Turn,
    TurnRecord,
};

pub use crate::cards::{StyleCard, StyleName};

pub use crate::board::Board;

pub use crate::history::{HistoryStack, Snapshot};

pub use crate::rules::{GameEngine, ValidTurns};

pub use crate::agents::{FirstLegalAgent, RandomAgent, TurnSelector};

pub use crate::play::{play_match, MatchConfig, MatchEnd, MatchOutcome};
