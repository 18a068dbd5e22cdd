use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::agents::TurnSelector;
use crate::core::player::{PlayerId, PlayerMap};
use crate::rules::GameEngine;

/// Match driver settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Stop after this many applied turns. Onitama positions can repeat
    /// forever, so some cap is needed.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_turns: 200 }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// The engine reports a winner.
    Won(PlayerId),
    /// `max_turns` turns were played without a winner.
    TurnLimit,
    /// This player's agent had nothing to propose.
    NoLegalTurn(PlayerId),
    /// The engine refused this player's proposed turn.
    Rejected(PlayerId),
}

/// Result of [`play_match`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub end: MatchEnd,
    pub turns_played: u32,
}

impl MatchOutcome {
    /// The winner, if the match ended in a win.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.end {
            MatchEnd::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Play `engine` forward, asking the agent of the player to move for each
/// turn.
///
/// The engine is left in its final position so callers can inspect or undo.
///
/// ## Example
///
/// ```
/// use rust_onitama::agents::{RandomAgent, TurnSelector};
/// use rust_onitama::core::PlayerMap;
/// use rust_onitama::play::{play_match, MatchConfig};
/// use rust_onitama::rules::GameEngine;
///
/// let mut engine = GameEngine::default();
/// let mut agents: PlayerMap<Box<dyn TurnSelector>> =
///     PlayerMap::new(|p| Box::new(RandomAgent::new(u64::from(p.0))) as Box<dyn TurnSelector>);
///
/// let outcome = play_match(&mut engine, &mut agents, &MatchConfig::new().with_max_turns(50));
/// assert!(outcome.turns_played <= 50);
/// assert_eq!(engine.move_log().len(), outcome.turns_played as usize);
/// ```
#[instrument(skip(engine, agents))]
pub fn play_match(
    engine: &mut GameEngine,
    agents: &mut PlayerMap<Box<dyn TurnSelector>>,
    config: &MatchConfig,
) -> MatchOutcome {
    let mut turns_played = 0;

    let end = loop {
        if let Some(winner) = engine.get_winner() {
            break MatchEnd::Won(winner);
        }
        if turns_played >= config.max_turns {
            break MatchEnd::TurnLimit;
        }

        let player = engine.whose_turn();
        let Some(turn) = agents[player].select_turn(engine, player) else {
            break MatchEnd::NoLegalTurn(player);
        };
        if !engine.apply_turn(&turn) {
            warn!(%turn, "engine rejected proposed turn");
            break MatchEnd::Rejected(player);
        }
        turns_played += 1;
    };

    info!(?end, turns_played, "match finished");
    MatchOutcome { end, turns_played }
}
