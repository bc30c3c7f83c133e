//! Console front end for the Scrapyard arena.
//!
//! Plays the loader, renderer, and entry-point roles around the engine:
//! parses flags, builds the config, recruits the stock roster, and drives
//! the battle round by round, printing the board as it goes.

mod render;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use scrapyard_core::{agents, Arena, ArenaConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid-robot battle arena", long_about = None)]
struct Args {
    /// Board rows.
    #[arg(long, default_value_t = 20)]
    rows: i32,

    /// Board columns.
    #[arg(long, default_value_t = 20)]
    cols: i32,

    /// Seed for the arena RNG; drawn from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Per-cell terrain probability at board initialization.
    #[arg(long, default_value_t = 0.1)]
    terrain: f64,

    /// Round cap before the battle is called a stalemate.
    #[arg(long, default_value_t = 1_000_000)]
    max_rounds: u64,

    /// Milliseconds to pause between rendered rounds.
    #[arg(long, default_value_t = 0)]
    delay: u64,

    /// Only print the verdict, not the per-round board.
    #[arg(long)]
    quiet: bool,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "off" => None,
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => Some(Level::INFO),
    };
    if let Some(level) = level {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    });

    let config = ArenaConfig {
        rows: args.rows,
        cols: args.cols,
        seed,
        terrain_density: args.terrain,
        max_rounds: args.max_rounds,
    };
    let mut arena = Arena::new(config).context("building the arena")?;

    for agent in agents::standard_roster() {
        let id = arena.recruit(agent).context("placing the roster")?;
        tracing::debug!(robot = %id, "recruited");
    }

    println!("seed: {seed}");
    if !args.quiet {
        println!("{}", render::board_snapshot(&arena));
        println!("{}", render::roster_summary(&arena));
    }

    let verdict = loop {
        if let Some(verdict) = arena.verdict() {
            break verdict;
        }
        arena.play_round();
        if !args.quiet {
            println!("{}", render::board_snapshot(&arena));
            println!("{}", render::roster_summary(&arena));
            if args.delay > 0 {
                std::thread::sleep(Duration::from_millis(args.delay));
            }
        }
    };

    println!("{}", render::verdict_line(&arena, verdict));
    Ok(())
}
