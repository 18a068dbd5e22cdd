use super::TurnSelector;
use crate::core::action::Turn;
use crate::core::player::{Player, PlayerId};
use crate::rules::GameEngine;

/// Always plays the first legal turn: first style in board order, then
/// tokens in row-major order, then the style's offsets in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalAgent;

impl TurnSelector for FirstLegalAgent {
    fn select_turn(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Turn> {
        let turns = Player::new(player).valid_turns(engine);
        let first = turns.styles().find_map(|style| turns.get(style).first().copied());
        first
    }
}
