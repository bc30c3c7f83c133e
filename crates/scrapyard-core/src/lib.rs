//! # Scrapyard Core
//!
//! Turn-based grid-robot battle simulation engine for Scrapyard.
//!
//! Autonomous robot strategies fight on a 2D cell grid: each turn a robot
//! points its radar, then either fires its weapon or moves. The arena
//! resolves sensing, movement, collisions, and weapon damage, and declares
//! a winner when one robot remains.
//!
//! ## Architecture
//!
//! - **Board** ([`grid`]): the cell grid: terrain, occupancy, wrecks.
//! - **Agents** ([`agent`], [`agents`]): strategy trait objects; the
//!   engine depends only on the contract, never on a concrete strategy.
//! - **Resolvers** ([`radar`], [`weapons`], [`movement`]): pure-ish
//!   functions that turn decisions into sensed contacts and board
//!   mutations.
//! - **Scheduler** ([`arena`]): the round loop, win check, and the seeded
//!   RNG every random draw flows through.
//!
//! ## Usage
//!
//! ```
//! use scrapyard_core::agents;
//! use scrapyard_core::arena::Arena;
//! use scrapyard_core::config::ArenaConfig;
//!
//! let config = ArenaConfig {
//!     seed: 42,
//!     max_rounds: 1_000,
//!     ..ArenaConfig::default()
//! };
//! let mut arena = Arena::new(config).unwrap();
//! for agent in agents::standard_roster() {
//!     arena.recruit(agent).unwrap();
//! }
//! let verdict = arena.run().unwrap();
//! println!("{verdict:?}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

pub mod agent;
pub mod agents;
pub mod arena;
pub mod config;
pub mod error;
pub mod grid;
pub mod movement;
pub mod radar;
pub mod robot;
pub mod weapons;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use arena::{Arena, Verdict};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use grid::{Board, CellKind, Direction, GridPos};
pub use robot::{Chassis, RobotId, RobotState, WeaponKind};
