//! Pyro: a flamethrower robot that hunts the nearest contact.

use std::collections::BTreeSet;

use crate::agent::Agent;
use crate::grid::{Direction, GridPos};
use crate::movement::MoveOrder;
use crate::radar::{RadarRequest, RadarSweep};
use crate::robot::{Chassis, RobotState, WeaponKind};

/// Rotates a radar beam clockwise around the compass, closes on the
/// closest enemy it has seen, and torches it at short range. Obstacle
/// positions are remembered across turns and walked around.
#[derive(Debug)]
pub struct Pyro {
    beam: u8,
    fired_last_turn: bool,
    target: Option<GridPos>,
    obstacles: BTreeSet<(i32, i32)>,
    fallback: u8,
}

impl Default for Pyro {
    fn default() -> Self {
        Self::new()
    }
}

impl Pyro {
    /// Stock build: mid-speed, heavy plate, short reach.
    #[must_use]
    pub fn new() -> Self {
        Self {
            beam: 1,
            fired_last_turn: false,
            target: None,
            obstacles: BTreeSet::new(),
            fallback: 1,
        }
    }

    fn passable(&self, pos: GridPos) -> bool {
        !self.obstacles.contains(&(pos.row, pos.col))
    }
}

impl Agent for Pyro {
    fn chassis(&self) -> Chassis {
        Chassis::new("pyro", 2, 5, WeaponKind::Flamethrower)
    }

    fn radar(&mut self, _state: &RobotState) -> RadarRequest {
        // Keep the beam where the action was if we just fired; otherwise
        // continue the clockwise rotation.
        if !self.fired_last_turn {
            self.beam = self.beam % 8 + 1;
        }
        match Direction::from_index(self.beam) {
            Some(dir) => RadarRequest::Beam(dir),
            None => RadarRequest::Off,
        }
    }

    fn observe(&mut self, state: &RobotState, sweep: &RadarSweep) {
        for contact in sweep.obstacles() {
            self.obstacles.insert((contact.pos.row, contact.pos.col));
        }
        let here = state.position();
        self.target = sweep
            .enemies()
            .min_by(|a, b| {
                here.euclidean(a.pos)
                    .partial_cmp(&here.euclidean(b.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|c| c.pos);
    }

    fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
        match self.target.take() {
            Some(target) => {
                self.fired_last_turn = true;
                Some(target)
            }
            None => {
                self.fired_last_turn = false;
                None
            }
        }
    }

    fn advance(&mut self, state: &RobotState) -> Option<MoveOrder> {
        let here = state.position();
        if let Some(target) = self.target {
            // Close the gap one axis at a time, detouring around
            // remembered obstacles.
            let row_step = (target.row - here.row).signum();
            let col_step = (target.col - here.col).signum();
            let vertical = GridPos::new(here.row + row_step, here.col);
            let horizontal = GridPos::new(here.row, here.col + col_step);

            if row_step != 0 && self.passable(vertical) {
                let dir = if row_step > 0 {
                    Direction::South
                } else {
                    Direction::North
                };
                return Some(MoveOrder::new(dir, 1));
            }
            if col_step != 0 && self.passable(horizontal) {
                let dir = if col_step > 0 {
                    Direction::East
                } else {
                    Direction::West
                };
                return Some(MoveOrder::new(dir, 1));
            }
            return None;
        }

        // Nothing sighted: wander the compass one step per turn.
        self.fallback = self.fallback % 8 + 1;
        Direction::from_index(self.fallback).map(|dir| MoveOrder::new(dir, 1))
    }
}
