//! Determinism verification tests.
//!
//! The arena's only random source is its seeded `ChaCha8Rng`; given the
//! same seed and the same roster, a run must reproduce exactly: terrain,
//! placements, damage rolls, verdict, everything.

use crate::agents;
use crate::arena::{Arena, Verdict};
use crate::config::ArenaConfig;
use crate::grid::CellKind;

fn stock_arena(seed: u64) -> Arena {
    let config = ArenaConfig {
        seed,
        max_rounds: 500,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::new(config).unwrap();
    for agent in agents::standard_roster() {
        arena.recruit(agent).unwrap();
    }
    arena
}

/// Runs a stock battle to its verdict and snapshots the end state.
fn run_to_verdict(seed: u64) -> (Verdict, u64, String) {
    let mut arena = stock_arena(seed);
    let verdict = arena.run().unwrap();
    let roster_json = serde_json::to_string(arena.roster()).unwrap();
    (verdict, arena.round(), roster_json)
}

#[test]
fn terrain_layout_is_seed_deterministic() {
    let a = stock_arena(1234);
    let b = stock_arena(1234);

    let cells_a: Vec<_> = a.board().iter().collect();
    let cells_b: Vec<_> = b.board().iter().collect();
    assert_eq!(cells_a, cells_b);
}

#[test]
fn placements_are_seed_deterministic() {
    let a = stock_arena(77);
    let b = stock_arena(77);

    let positions_a: Vec<_> = a.roster().iter().map(|s| s.position()).collect();
    let positions_b: Vec<_> = b.roster().iter().map(|s| s.position()).collect();
    assert_eq!(positions_a, positions_b);
}

#[test]
fn different_seeds_lay_different_terrain() {
    let a = stock_arena(1);
    let b = stock_arena(2);

    let terrain = |arena: &Arena| -> Vec<_> {
        arena
            .board()
            .iter()
            .filter(|(_, kind)| {
                matches!(kind, CellKind::Mound | CellKind::Pit | CellKind::Scorch)
            })
            .collect()
    };
    // Not impossible to collide, but 400 cells of 10% terrain make it
    // vanishingly unlikely; a collision here means the seed is ignored.
    assert_ne!(terrain(&a), terrain(&b));
}

#[test]
fn same_seed_same_battle() {
    let (verdict_a, rounds_a, roster_a) = run_to_verdict(42);
    let (verdict_b, rounds_b, roster_b) = run_to_verdict(42);

    assert_eq!(verdict_a, verdict_b);
    assert_eq!(rounds_a, rounds_b);
    assert_eq!(roster_a, roster_b);
}

#[test]
fn round_by_round_states_match() {
    let mut a = stock_arena(9);
    let mut b = stock_arena(9);

    for _ in 0..50 {
        if a.verdict().is_some() {
            break;
        }
        a.play_round();
        b.play_round();

        let snapshot_a = serde_json::to_string(a.roster()).unwrap();
        let snapshot_b = serde_json::to_string(b.roster()).unwrap();
        assert_eq!(snapshot_a, snapshot_b);
    }
}
