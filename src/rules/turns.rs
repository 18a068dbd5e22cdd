//! Legal-turn enumeration and the facing convention.
//!
//! Style offsets are written from player B's side of the board. Player A
//! faces the other way, so its offsets are mirrored:
//!
//! - player A: `offset = origin - destination`
//! - player B: `offset = destination - origin`

use rustc_hash::FxHashMap;

use super::engine::GameEngine;
use crate::cards::{Offset, StyleName};
use crate::core::action::Turn;
use crate::core::player::PlayerId;

/// The style offset a move from `origin` to `destination` needs for `player`.
#[must_use]
pub fn required_offset(player: PlayerId, origin: (i32, i32), destination: (i32, i32)) -> Offset {
    if player == PlayerId::A {
        (origin.0 - destination.0, origin.1 - destination.1)
    } else {
        (destination.0 - origin.0, destination.1 - origin.1)
    }
}

/// Where `offset` takes a piece at `origin` for `player`.
#[must_use]
pub fn destination(player: PlayerId, origin: (i32, i32), offset: Offset) -> (i32, i32) {
    if player == PlayerId::A {
        (origin.0 - offset.0, origin.1 - offset.1)
    } else {
        (origin.0 + offset.0, origin.1 + offset.1)
    }
}

/// Legal turns for one player, keyed by style.
///
/// Every style the player owns has an entry, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidTurns {
    by_style: FxHashMap<StyleName, Vec<Turn>>,
    /// Styles in the order the board lists them.
    order: Vec<StyleName>,
}

impl ValidTurns {
    /// Enumerate every (style, token, offset) combination the engine accepts.
    pub(crate) fn collect(engine: &GameEngine, player: PlayerId) -> Self {
        let board = engine.board();
        let tokens = board.tokens_of(player);
        let mut valid = Self::default();

        for style in board.styles_of(player) {
            let mut turns = Vec::new();
            for &origin in &tokens {
                for &offset in style.offsets() {
                    let (row_d, col_d) = destination(player, origin, offset);
                    if engine.is_legal_move(origin.0, origin.1, row_d, col_d) {
                        turns.push(Turn::new(origin, (row_d, col_d), style.name, player));
                    }
                }
            }
            valid.order.push(style.name);
            valid.by_style.insert(style.name, turns);
        }

        valid
    }

    /// Turns available with `style`. Empty for styles the player lacks.
    #[must_use]
    pub fn get(&self, style: StyleName) -> &[Turn] {
        self.by_style.get(&style).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Styles with an entry, in board order.
    pub fn styles(&self) -> impl Iterator<Item = StyleName> + '_ {
        self.order.iter().copied()
    }

    /// The underlying style -> turns map.
    #[must_use]
    pub fn as_map(&self) -> &FxHashMap<StyleName, Vec<Turn>> {
        &self.by_style
    }

    /// All turns, grouped by style in board order.
    #[must_use]
    pub fn flatten(&self) -> Vec<Turn> {
        self.styles().flat_map(|s| self.get(s).iter().copied()).collect()
    }

    /// Total number of turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_style.values().map(Vec::len).sum()
    }

    /// Whether no turn is available at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
