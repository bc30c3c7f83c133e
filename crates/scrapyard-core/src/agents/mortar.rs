//! Mortar: a dug-in grenade bombardier.

use crate::agent::Agent;
use crate::grid::{Direction, GridPos};
use crate::movement::MoveOrder;
use crate::radar::{RadarRequest, RadarSweep};
use crate::robot::{Chassis, RobotState, WeaponKind};

/// Scan-center offsets, a ring at grenade-friendly range around the
/// robot. One center is probed per turn.
const RING: [(i32, i32); 8] = [
    (-4, 0),
    (-3, 3),
    (0, 4),
    (3, 3),
    (4, 0),
    (3, -3),
    (0, -4),
    (-3, -3),
];

/// Barely moves; sweeps a ring of area scans around itself and lobs a
/// grenade at the last sighting. Repositions a single step whenever a
/// full ring of scans comes up empty.
#[derive(Debug)]
pub struct Mortar {
    ring_idx: usize,
    dry_scans: usize,
    target: Option<GridPos>,
    shuffle: u8,
}

impl Default for Mortar {
    fn default() -> Self {
        Self::new()
    }
}

impl Mortar {
    /// Stock build: nearly stationary, maximum plate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring_idx: 0,
            dry_scans: 0,
            target: None,
            shuffle: 1,
        }
    }
}

impl Agent for Mortar {
    fn chassis(&self) -> Chassis {
        Chassis::new("mortar", 1, 6, WeaponKind::Grenade)
    }

    fn radar(&mut self, state: &RobotState) -> RadarRequest {
        let (dr, dc) = RING[self.ring_idx];
        self.ring_idx = (self.ring_idx + 1) % RING.len();
        let here = state.position();
        RadarRequest::Area(GridPos::new(here.row + dr, here.col + dc))
    }

    fn observe(&mut self, _state: &RobotState, sweep: &RadarSweep) {
        match sweep.enemies().next() {
            Some(contact) => {
                self.target = Some(contact.pos);
                self.dry_scans = 0;
            }
            None => self.dry_scans += 1,
        }
    }

    fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
        self.target.take()
    }

    fn advance(&mut self, _state: &RobotState) -> Option<MoveOrder> {
        // Hold position while scans are fresh; shuffle one step once a
        // whole ring has come up dry.
        if self.dry_scans < RING.len() {
            return None;
        }
        self.dry_scans = 0;
        self.shuffle = self.shuffle % 8 + 1;
        Direction::from_index(self.shuffle).map(|dir| MoveOrder::new(dir, 1))
    }
}
