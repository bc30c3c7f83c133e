//! Arena configuration.

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Hard ceiling on rounds; a guard against degenerate strategies that
/// never close out a fight, not a gameplay parameter.
pub const DEFAULT_MAX_ROUNDS: u64 = 1_000_000;

/// Tunable parameters for one run.
///
/// Deserializable so front ends can load scenarios from JSON; the
/// defaults reproduce the classic setup (20x20 board, light terrain).
///
/// # Example
///
/// ```
/// use scrapyard_core::config::ArenaConfig;
///
/// let config = ArenaConfig {
///     seed: 7,
///     ..ArenaConfig::default()
/// };
/// assert_eq!(config.rows, 20);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Board rows.
    pub rows: i32,
    /// Board columns.
    pub cols: i32,
    /// Seed for the arena's random source (terrain, placement, damage).
    pub seed: u64,
    /// Per-cell probability of terrain at initialization, `0.0..=1.0`.
    pub terrain_density: f64,
    /// Round cap before the run is declared a stalemate.
    pub max_rounds: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            seed: 0,
            terrain_density: 0.1,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl ArenaConfig {
    /// Checks that the configuration describes a usable arena.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidDimensions`] when either dimension is not
    /// positive.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(ArenaError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
