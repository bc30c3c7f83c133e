//! Brawler: a heavily armored hammer robot that patrols and swings.

use crate::agent::Agent;
use crate::grid::{Direction, GridPos};
use crate::movement::MoveOrder;
use crate::radar::{RadarRequest, RadarSweep};
use crate::robot::{Chassis, RobotState, WeaponKind};

/// Patrol directions, tried in order from the current heading.
const PATROL: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
];

/// Walks a box patrol one step at a time, radar pointed the way it walks,
/// and swings the hammer at anything adjacent.
#[derive(Debug)]
pub struct Brawler {
    heading: usize,
    target: Option<GridPos>,
}

impl Brawler {
    /// Stock build: slow, thick plate, wants to be touched.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading: 0,
            target: None,
        }
    }
}

impl Default for Brawler {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for Brawler {
    fn chassis(&self) -> Chassis {
        Chassis::new("brawler", 2, 5, WeaponKind::Hammer)
    }

    fn radar(&mut self, _state: &RobotState) -> RadarRequest {
        RadarRequest::Beam(PATROL[self.heading])
    }

    fn observe(&mut self, state: &RobotState, sweep: &RadarSweep) {
        self.target = sweep
            .enemies()
            .find(|c| state.position().chebyshev(c.pos) <= 1)
            .map(|c| c.pos);
    }

    fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
        self.target.take()
    }

    fn advance(&mut self, state: &RobotState) -> Option<MoveOrder> {
        let (rows, cols) = state.bounds();
        let pos = state.position();
        for attempt in 0..PATROL.len() {
            let candidate = (self.heading + attempt) % PATROL.len();
            let next = pos.step(PATROL[candidate]);
            if next.row >= 0 && next.row < rows && next.col >= 0 && next.col < cols {
                self.heading = candidate;
                return Some(MoveOrder::new(PATROL[candidate], 1));
            }
        }
        None
    }
}
