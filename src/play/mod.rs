//! Match driver: alternates agents on one engine until the game ends.

mod runner;

pub use runner::{play_match, MatchConfig, MatchEnd, MatchOutcome};
