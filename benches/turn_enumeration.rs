use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rust_onitama::agents::{RandomAgent, TurnSelector};
use rust_onitama::core::{Player, PlayerId, PlayerMap};
use rust_onitama::play::{play_match, MatchConfig};
use rust_onitama::GameEngine;

/// Count leaf positions `depth` plies ahead, using make/undo on one engine.
fn perft(engine: &mut GameEngine, depth: u32) -> u64 {
    if depth == 0 || engine.is_over() {
        return 1;
    }
    let turns = Player::new(engine.whose_turn()).valid_turns(engine).flatten();
    let mut nodes = 0;
    for turn in &turns {
        if engine.apply_turn(turn) {
            nodes += perft(engine, depth - 1);
            engine.undo();
        }
    }
    nodes
}

fn bench_valid_turns(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_turns");
    for size in [5usize, 7, 9] {
        let engine = match GameEngine::with_size(size) {
            Ok(engine) => engine,
            Err(err) => panic!("board size {size}: {err}"),
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| Player::new(PlayerId::A).valid_turns(black_box(engine)).len());
        });
    }
    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);
    for depth in 1..=3u32 {
        let mut engine = GameEngine::default();
        let nodes = perft(&mut engine, depth);
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut engine, black_box(depth)));
        });
    }
    group.finish();
}

fn bench_random_match(c: &mut Criterion) {
    let config = MatchConfig::new().with_max_turns(200);
    c.bench_function("random_match_200", |b| {
        b.iter(|| {
            let mut engine = GameEngine::default();
            let mut agents: PlayerMap<Box<dyn TurnSelector>> = PlayerMap::new(|p| {
                Box::new(RandomAgent::new(u64::from(p.0) + 17)) as Box<dyn TurnSelector>
            });
            play_match(&mut engine, &mut agents, black_box(&config))
        });
    });
}

criterion_group!(benches, bench_valid_turns, bench_perft, bench_random_match);
criterion_main!(benches);
