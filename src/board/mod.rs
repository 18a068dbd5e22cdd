//! Board representation and style exchange.
//!
//! The `Board` owns the token grid and the five style cards. It provides the
//! legality primitives the engine builds on (coordinate validity, token
//! reads/writes) and the spare-card exchange.

mod grid;
mod render;

pub use grid::Board;
