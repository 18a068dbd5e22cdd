//! Undo history.
//!
//! A plain LIFO of full snapshots. Each successful move pushes the grid and
//! style list as they were before the move; undo pops one and restores it.
//! There is no structural sharing or diffing between entries.

mod stack;

pub use stack::{HistoryStack, Snapshot};
