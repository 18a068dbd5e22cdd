//! Match driver integration tests with the built-in agents.

use rust_onitama::agents::{FirstLegalAgent, RandomAgent, TurnSelector};
use rust_onitama::cards::StyleName;
use rust_onitama::core::{parse_grid, GameRng, PlayerId, PlayerMap};
use rust_onitama::play::{play_match, MatchConfig, MatchEnd};
use rust_onitama::GameEngine;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_agents(seed: u64) -> PlayerMap<Box<dyn TurnSelector>> {
    let mut rng = GameRng::new(seed);
    let mut agents: PlayerMap<Box<dyn TurnSelector>> =
        PlayerMap::new(|_| Box::new(FirstLegalAgent) as Box<dyn TurnSelector>);
    for player in PlayerId::both() {
        agents[player] = Box::new(RandomAgent::from_rng(rng.fork()));
    }
    agents
}

#[test]
fn test_random_match_is_reproducible() {
    init_logging();
    let config = MatchConfig::new().with_max_turns(120);

    let mut first = GameEngine::default();
    let outcome_a = play_match(&mut first, &mut random_agents(9), &config);

    let mut second = GameEngine::default();
    let outcome_b = play_match(&mut second, &mut random_agents(9), &config);

    assert_eq!(outcome_a, outcome_b);
    assert_eq!(first.get_board(), second.get_board());
    assert_eq!(first.move_log(), second.move_log());
}

#[test]
fn test_random_matches_end_cleanly() {
    init_logging();
    let config = MatchConfig::default();

    for seed in 0..20 {
        let mut engine = GameEngine::default();
        let outcome = play_match(&mut engine, &mut random_agents(seed), &config);

        assert!(outcome.turns_played <= config.max_turns);
        assert_eq!(engine.move_log().len(), outcome.turns_played as usize);
        match outcome.end {
            MatchEnd::Won(player) => assert_eq!(engine.get_winner(), Some(player)),
            MatchEnd::TurnLimit => assert_eq!(outcome.turns_played, config.max_turns),
            MatchEnd::NoLegalTurn(player) => assert_eq!(engine.whose_turn(), player),
            MatchEnd::Rejected(player) => panic!("{player} proposed an illegal turn"),
        }
    }
}

#[test]
fn test_match_can_be_unwound() {
    init_logging();
    let mut engine = GameEngine::default();
    let start = engine.get_board();

    let config = MatchConfig::new().with_max_turns(30);
    let outcome = play_match(&mut engine, &mut random_agents(4), &config);
    for _ in 0..outcome.turns_played {
        assert!(engine.undo());
    }
    assert_eq!(engine.get_board(), start);
    assert_eq!(engine.whose_turn(), PlayerId::A);
}

#[test]
fn test_log_records_plies_in_order() {
    let mut engine = GameEngine::default();
    let config = MatchConfig::new().with_max_turns(10);
    let outcome = play_match(&mut engine, &mut random_agents(12), &config);

    for (i, record) in engine.move_log().iter().enumerate() {
        assert_eq!(record.ply as usize, i);
        let expected = if i % 2 == 0 { PlayerId::A } else { PlayerId::B };
        assert_eq!(record.turn.player, expected);
    }
    assert_eq!(engine.move_log().len(), outcome.turns_played as usize);
}

#[test]
fn test_blocked_mover_reports_no_legal_turn() {
    let mut engine = GameEngine::default();
    assert!(engine.make_move(0, 2, 1, 2, StyleName::Crab));
    let grid = parse_grid(&["yyyyy", "yyyyy", "yyYyy", "yyyyy", "yyyyy"]).unwrap();
    engine.set_board(5, &grid).unwrap();

    let outcome = play_match(&mut engine, &mut random_agents(3), &MatchConfig::default());
    assert_eq!(outcome.end, MatchEnd::NoLegalTurn(PlayerId::B));
    assert_eq!(outcome.turns_played, 0);
}
