//! Board module: the grid the battle is fought on.
//!
//! The board is a rectangular `rows x cols` array of [`CellKind`]s. Terrain
//! cells (mounds, pits, scorch patches) are scattered at initialization and
//! never move; robot occupancy cells are maintained by the movement and
//! weapon resolvers on behalf of the [`Arena`](crate::arena::Arena).
//!
//! # Invariants
//!
//! - At most one live robot occupies any cell.
//! - After every mutation, a robot's recorded coordinates and the board's
//!   occupancy marker agree. The board does not enforce this on its own;
//!   the resolvers perform their bookkeeping through [`Board::relocate`]
//!   and [`Board::mark_wreck`] to keep it true.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs with signed components so that
//! out-of-bounds arithmetic (a radar target past the edge, a shot into the
//! void) is representable before it is clamped or rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use rand::Rng;

use crate::robot::RobotId;

// =============================================================================
// GridPos
// =============================================================================

/// A board coordinate in `(row, col)` form.
///
/// Components are signed: positions outside the board are legal values
/// (they arise from decision arithmetic) and are filtered or clamped at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Row index, increasing downward.
    pub row: i32,
    /// Column index, increasing rightward.
    pub col: i32,
}

impl GridPos {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position one cell away in the given direction.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Self) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Chebyshev (king-move) distance to another position.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn euclidean(self, other: Self) -> f64 {
        let dr = f64::from(self.row - other.row);
        let dc = f64::from(self.col - other.col);
        dr.hypot(dc)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Eight-point compass direction.
///
/// Directions carry the wire indices robot strategies have always used:
/// `1` is north, counting clockwise to `8` at north-west. Index `0` is
/// reserved (a "no direction" sentinel in decision values) and any index
/// outside `1..=8` decodes to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up: row - 1.
    North,
    /// Up-right diagonal.
    NorthEast,
    /// Right: col + 1.
    East,
    /// Down-right diagonal.
    SouthEast,
    /// Down: row + 1.
    South,
    /// Down-left diagonal.
    SouthWest,
    /// Left: col - 1.
    West,
    /// Up-left diagonal.
    NorthWest,
}

impl Direction {
    /// All eight directions in index order.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Decodes a wire index. Returns `None` for the reserved index `0` and
    /// anything past `8`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::North),
            2 => Some(Self::NorthEast),
            3 => Some(Self::East),
            4 => Some(Self::SouthEast),
            5 => Some(Self::South),
            6 => Some(Self::SouthWest),
            7 => Some(Self::West),
            8 => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// The wire index of this direction (`1..=8`).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::North => 1,
            Self::NorthEast => 2,
            Self::East => 3,
            Self::SouthEast => 4,
            Self::South => 5,
            Self::SouthWest => 6,
            Self::West => 7,
            Self::NorthWest => 8,
        }
    }

    /// Unit `(d_row, d_col)` offset for one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// CellKind
// =============================================================================

/// Semantic content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Open ground.
    Empty,
    /// Impassable terrain heap. Movement stops before it.
    Mound,
    /// Trap: a robot that enters never moves again.
    Pit,
    /// Burning ground: entering costs a flamethrower damage roll.
    Scorch,
    /// Occupied by the given live robot.
    Robot(RobotId),
    /// Remains of a dead robot. Impassable.
    Wreck,
}

impl CellKind {
    /// Single-character glyph for console rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Mound => 'M',
            Self::Pit => 'P',
            Self::Scorch => 'F',
            Self::Robot(_) => 'R',
            Self::Wreck => 'X',
        }
    }

    /// Returns `true` if a moving robot may enter this cell (possibly with
    /// consequences; pits and scorch are passable in this sense).
    #[must_use]
    pub const fn is_enterable(self) -> bool {
        matches!(self, Self::Empty | Self::Pit | Self::Scorch)
    }
}

// =============================================================================
// Board
// =============================================================================

/// The battle grid.
///
/// Owned exclusively by the arena for the duration of a run. Robot agents
/// never see it directly; they sense it through radar sweeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<CellKind>,
}

impl Board {
    /// Creates an empty board. Dimensions must be positive; the arena
    /// validates its config before constructing one.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        debug_assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![CellKind::Empty; (rows * cols) as usize],
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Returns `true` if the position lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Clamps a position onto the board.
    #[must_use]
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        GridPos {
            row: pos.row.clamp(0, self.rows - 1),
            col: pos.col.clamp(0, self.cols - 1),
        }
    }

    /// Cell content at `pos`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<CellKind> {
        self.in_bounds(pos)
            .then(|| self.cells[(pos.row * self.cols + pos.col) as usize])
    }

    /// Overwrites the cell at `pos`. Off-board positions are ignored.
    pub fn set(&mut self, pos: GridPos, kind: CellKind) {
        if self.in_bounds(pos) {
            self.cells[(pos.row * self.cols + pos.col) as usize] = kind;
        }
    }

    /// Returns the robot occupying `pos`, if any.
    #[must_use]
    pub fn robot_at(&self, pos: GridPos) -> Option<RobotId> {
        match self.get(pos) {
            Some(CellKind::Robot(id)) => Some(id),
            _ => None,
        }
    }

    /// Moves a robot's occupancy marker from `from` to `to`.
    ///
    /// The single bookkeeping step of a move resolution: the origin cell is
    /// cleared and the destination marked, in that order, so the occupancy
    /// invariant holds when the call returns. A robot "moving" onto its own
    /// cell is a no-op that leaves the marker in place.
    pub fn relocate(&mut self, id: RobotId, from: GridPos, to: GridPos) {
        if from == to {
            return;
        }
        self.set(from, CellKind::Empty);
        self.set(to, CellKind::Robot(id));
    }

    /// Replaces a dead robot's occupancy marker with a wreck.
    pub fn mark_wreck(&mut self, pos: GridPos) {
        if matches!(self.get(pos), Some(CellKind::Robot(_))) {
            self.set(pos, CellKind::Wreck);
        }
    }

    /// Scatters terrain across the board.
    ///
    /// Each cell independently becomes terrain with probability `density`,
    /// the kind drawn evenly from mound/pit/scorch. Runs before any robot
    /// is placed, so only empty cells are considered.
    pub fn seed_terrain<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        const TERRAIN: [CellKind; 3] = [CellKind::Mound, CellKind::Pit, CellKind::Scorch];
        for cell in &mut self.cells {
            if *cell == CellKind::Empty && rng.gen_bool(density.clamp(0.0, 1.0)) {
                *cell = TERRAIN[rng.gen_range(0..TERRAIN.len())];
            }
        }
    }

    /// Picks a random empty cell, or `None` if the board is full.
    ///
    /// Rejection-samples a bounded number of times, then falls back to a
    /// linear scan so a crowded board still terminates.
    pub fn random_vacancy<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GridPos> {
        for _ in 0..(self.cells.len() * 2) {
            let pos = GridPos::new(rng.gen_range(0..self.rows), rng.gen_range(0..self.cols));
            if self.get(pos) == Some(CellKind::Empty) {
                return Some(pos);
            }
        }
        self.iter()
            .find(|&(_, kind)| kind == CellKind::Empty)
            .map(|(pos, _)| pos)
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellKind)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            let i = i as i32;
            (GridPos::new(i / self.cols, i % self.cols), kind)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
