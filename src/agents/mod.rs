//! Move selection.
//!
//! Players are plain identities; choosing a move is a separate capability.
//! A [`TurnSelector`] looks at the engine (read-only) and proposes a
//! [`Turn`] for the player it is asked about. The engine still validates the
//! proposal, so a selector can never corrupt the game.

mod first;
mod random;

pub use first::FirstLegalAgent;
pub use random::RandomAgent;

use crate::core::action::Turn;
use crate::core::player::PlayerId;
use crate::rules::GameEngine;

/// Something that picks the next turn for a player.
///
/// Closures of the right shape are selectors too:
///
/// ```
/// use rust_onitama::agents::TurnSelector;
/// use rust_onitama::core::{Player, PlayerId};
/// use rust_onitama::rules::GameEngine;
///
/// let mut last_legal = |engine: &GameEngine, player: PlayerId| {
///     Player::new(player).valid_turns(engine).flatten().pop()
/// };
///
/// let engine = GameEngine::default();
/// let turn = last_legal.select_turn(&engine, PlayerId::A).unwrap();
/// assert_eq!(turn.player, PlayerId::A);
/// ```
pub trait TurnSelector {
    /// Propose a turn for `player`, or `None` if there is nothing to play.
    fn select_turn(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Turn>;
}

impl<F> TurnSelector for F
where
    F: FnMut(&GameEngine, PlayerId) -> Option<Turn>,
{
    fn select_turn(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Turn> {
        self(engine, player)
    }
}
