use tracing::trace;

use super::TurnSelector;
use crate::core::action::Turn;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::rules::GameEngine;

/// Picks uniformly among all legal turns.
///
/// Seeded, so two agents built from the same seed make the same choices in
/// the same positions.
///
/// ## Example
///
/// ```
/// use rust_onitama::agents::{RandomAgent, TurnSelector};
/// use rust_onitama::core::PlayerId;
/// use rust_onitama::rules::GameEngine;
///
/// let engine = GameEngine::default();
/// let first = RandomAgent::new(3).select_turn(&engine, PlayerId::A);
/// let again = RandomAgent::new(3).select_turn(&engine, PlayerId::A);
/// assert_eq!(first, again);
/// ```
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Use an existing generator, e.g. a fork of a match-level one.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl TurnSelector for RandomAgent {
    fn select_turn(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Turn> {
        let turns = Player::new(player).valid_turns(engine).flatten();
        let choice = self.rng.choose(&turns).copied();
        trace!(options = turns.len(), ?choice, "random pick");
        choice
    }
}
