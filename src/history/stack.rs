//! LIFO stack of full pre-move snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::StyleCard;
use crate::core::token::Grid;

/// Board state captured immediately before a move.
///
/// Owns its data; nothing in the live game shares storage with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Token grid before the move.
    pub grid: Grid,

    /// All five style cards before the move, owners included.
    pub styles: Vec<StyleCard>,
}

/// Undo history.
///
/// Snapshots are taken by value, so whatever is pushed can no longer be
/// reached by the caller.
///
/// ## Example
///
/// ```
/// use rust_onitama::board::Board;
/// use rust_onitama::history::HistoryStack;
///
/// let board = Board::new(5).unwrap();
/// let mut history = HistoryStack::new();
/// assert!(history.is_empty());
///
/// history.push(board.deep_copy(), board.styles_snapshot());
/// let snapshot = history.pop().unwrap();
/// assert_eq!(snapshot.grid, board.deep_copy());
/// assert!(history.pop().is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryStack {
    /// Index 0 = oldest, last = most recent.
    entries: Vec<Snapshot>,
}

impl HistoryStack {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot built from a grid and style list.
    pub fn push(&mut self, grid: Grid, styles: Vec<StyleCard>) {
        self.entries.push(Snapshot { grid, styles });
    }

    /// Remove and return the most recent snapshot, or `None` if empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    /// The most recent snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    /// Whether no snapshots remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{standard_deal, StyleName};
    use crate::core::token::parse_grid;
    use crate::core::PlayerId;

    fn grid(rows: &[&str]) -> Grid {
        parse_grid(rows).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let mut history = HistoryStack::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.pop().is_none());
        assert!(history.peek().is_none());
    }

    #[test]
    fn test_lifo_order() {
        let first = grid(&["xxXxx", "     ", "     ", "     ", "yyYyy"]);
        let second = grid(&["xx xx", "  X  ", "     ", "     ", "yyYyy"]);

        let mut history = HistoryStack::new();
        history.push(first.clone(), standard_deal());
        history.push(second.clone(), standard_deal());
        assert_eq!(history.len(), 2);
        assert_eq!(history.peek().unwrap().grid, second);

        assert_eq!(history.pop().unwrap().grid, second);
        assert_eq!(history.pop().unwrap().grid, first);
        assert!(history.is_empty());
    }

    #[test]
    fn test_stored_styles_are_owned() {
        let mut styles = standard_deal();
        let mut history = HistoryStack::new();
        history.push(grid(&["xxXxx"]), styles.clone());

        styles[0].owner = None;

        let snapshot = history.pop().unwrap();
        let crab = snapshot.styles.iter().find(|s| s.name == StyleName::Crab).unwrap();
        assert_eq!(crab.owner, Some(PlayerId::A));
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStack::new();
        history.push(grid(&["xxXxx"]), standard_deal());
        history.push(grid(&["xxXxx"]), standard_deal());
        history.clear();
        assert!(history.is_empty());
    }
}
