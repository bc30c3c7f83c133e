use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrapyard_core::agents;
use scrapyard_core::arena::Arena;
use scrapyard_core::config::ArenaConfig;

fn stock_arena(rows: i32, cols: i32) -> Arena {
    let config = ArenaConfig {
        rows,
        cols,
        seed: 42,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::new(config).expect("valid config");
    for agent in agents::standard_roster() {
        arena.recruit(agent).expect("room to place the roster");
    }
    arena
}

fn bench_play_round(c: &mut Criterion) {
    c.bench_function("play_round_20x20", |b| {
        let mut arena = stock_arena(20, 20);
        b.iter(|| {
            arena.play_round();
            black_box(arena.round());
        });
    });
}

fn bench_play_round_large_board(c: &mut Criterion) {
    c.bench_function("play_round_80x80", |b| {
        let mut arena = stock_arena(80, 80);
        b.iter(|| {
            arena.play_round();
            black_box(arena.round());
        });
    });
}

fn bench_full_battle(c: &mut Criterion) {
    c.bench_function("battle_to_verdict", |b| {
        b.iter(|| {
            let config = ArenaConfig {
                seed: 7,
                max_rounds: 200,
                ..ArenaConfig::default()
            };
            let mut arena = Arena::new(config).expect("valid config");
            for agent in agents::standard_roster() {
                arena.recruit(agent).expect("room to place the roster");
            }
            black_box(arena.run().expect("roster is non-empty"));
        });
    });
}

criterion_group!(
    benches,
    bench_play_round,
    bench_play_round_large_board,
    bench_full_battle
);
criterion_main!(benches);
