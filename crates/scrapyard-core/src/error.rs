//! Error types for arena setup.
//!
//! Only configuration-time problems are errors. Runtime decision mistakes
//! (out-of-bounds targets, bad direction indices, over-distance moves) are
//! clamped or ignored by the resolvers; strategies are expected to make
//! imperfect decisions, and a bad turn is not a fault.

use thiserror::Error;

/// Setup failures reported before or at the start of a run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// `run` was called on an arena with an empty roster.
    #[error("no robots loaded")]
    NoRobotsLoaded,

    /// Recruitment failed because no vacant cell remains.
    #[error("board is full; cannot place robot {name}")]
    BoardFull {
        /// Name of the robot that could not be placed.
        name: String,
    },

    /// The configured board dimensions are not positive.
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Configured row count.
        rows: i32,
        /// Configured column count.
        cols: i32,
    },
}
