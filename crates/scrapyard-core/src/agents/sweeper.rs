//! Sweeper: a railgun sniper that rakes its own row with area scans.

use crate::agent::Agent;
use crate::grid::{Direction, GridPos};
use crate::movement::MoveOrder;
use crate::radar::{RadarRequest, RadarSweep};
use crate::robot::{Chassis, RobotState, WeaponKind};

/// Scans along its current row in column jumps, fires the railgun at any
/// contact, and drifts toward the west wall between sweeps, shifting
/// rows once a sweep completes.
#[derive(Debug)]
pub struct Sweeper {
    scan_col: i32,
    target: Option<GridPos>,
    heading_south: bool,
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sweeper {
    /// Stock build: fast and well-armored, counting on range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scan_col: 0,
            target: None,
            heading_south: true,
        }
    }
}

const SCAN_STRIDE: i32 = 3;

impl Agent for Sweeper {
    fn chassis(&self) -> Chassis {
        Chassis::new("sweeper", 3, 4, WeaponKind::Railgun)
    }

    fn radar(&mut self, state: &RobotState) -> RadarRequest {
        let center = GridPos::new(state.position().row, self.scan_col);
        let (_, cols) = state.bounds();
        self.scan_col = if self.scan_col + SCAN_STRIDE < cols {
            self.scan_col + SCAN_STRIDE
        } else {
            0
        };
        RadarRequest::Area(center)
    }

    fn observe(&mut self, _state: &RobotState, sweep: &RadarSweep) {
        self.target = sweep.enemies().next().map(|c| c.pos);
    }

    fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
        self.target.take()
    }

    fn advance(&mut self, state: &RobotState) -> Option<MoveOrder> {
        let pos = state.position();
        if pos.col > 0 {
            return Some(MoveOrder::new(Direction::West, 1));
        }
        // Sweep finished; shift rows, bouncing off the walls.
        if self.scan_col == 0 {
            let (rows, _) = state.bounds();
            if self.heading_south {
                if pos.row + SCAN_STRIDE < rows {
                    return Some(MoveOrder::new(Direction::South, SCAN_STRIDE));
                }
                self.heading_south = false;
            }
            if pos.row - SCAN_STRIDE >= 0 {
                return Some(MoveOrder::new(Direction::North, SCAN_STRIDE));
            }
            self.heading_south = true;
        }
        None
    }
}
