//! Test helper functions and agent doubles.
//!
//! Provides arena factories with terrain switched off (so scenarios can
//! lay out the board by hand) and two deterministic [`Agent`] doubles:
//! an inert one and a scriptable one with observable call counters.

use std::cell::Cell;
use std::rc::Rc;

use crate::agent::Agent;
use crate::arena::Arena;
use crate::config::ArenaConfig;
use crate::grid::{Direction, GridPos};
use crate::movement::MoveOrder;
use crate::radar::{RadarRequest, RadarSweep};
use crate::robot::{Chassis, RobotState, WeaponKind};

// =============================================================================
// Arena factories
// =============================================================================

/// An arena with no terrain, for hand-built scenarios.
pub fn empty_arena(rows: i32, cols: i32, seed: u64) -> Arena {
    let config = ArenaConfig {
        rows,
        cols,
        seed,
        terrain_density: 0.0,
        ..ArenaConfig::default()
    };
    Arena::new(config).expect("test config is valid")
}

/// An arena with terrain scattered at the default density.
pub fn seeded_arena(seed: u64) -> Arena {
    let config = ArenaConfig {
        seed,
        ..ArenaConfig::default()
    };
    Arena::new(config).expect("test config is valid")
}

// =============================================================================
// IdleAgent
// =============================================================================

/// An agent that never scans, never fires, never moves.
pub struct IdleAgent {
    chassis: Chassis,
}

impl IdleAgent {
    /// An idle hammer robot with a middling build.
    pub fn hammer() -> Self {
        Self::with_chassis(Chassis::new("idle", 2, 2, WeaponKind::Hammer))
    }

    /// An idle robot with the given build.
    pub fn with_chassis(chassis: Chassis) -> Self {
        Self { chassis }
    }
}

impl Agent for IdleAgent {
    fn chassis(&self) -> Chassis {
        self.chassis.clone()
    }

    fn radar(&mut self, _state: &RobotState) -> RadarRequest {
        RadarRequest::Off
    }

    fn observe(&mut self, _state: &RobotState, _sweep: &RadarSweep) {}

    fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
        None
    }

    fn advance(&mut self, _state: &RobotState) -> Option<MoveOrder> {
        None
    }
}

// =============================================================================
// ScriptedAgent
// =============================================================================

/// An agent that repeats fixed decisions every turn and counts how often
/// each hook is called.
///
/// Counters are shared `Rc<Cell<_>>` handles: clone them out (via
/// [`ScriptedAgent::radar_calls`] and friends) before boxing the agent,
/// then read them after rounds have been played.
pub struct ScriptedAgent {
    chassis: Chassis,
    request: RadarRequest,
    fire_at: Option<GridPos>,
    advance: Option<MoveOrder>,
    radar_calls: Rc<Cell<usize>>,
    observe_calls: Rc<Cell<usize>>,
    sweeps_with_enemies: Rc<Cell<usize>>,
}

impl ScriptedAgent {
    /// A scripted agent that does nothing until told otherwise.
    pub fn new(chassis: Chassis) -> Self {
        Self {
            chassis,
            request: RadarRequest::Off,
            fire_at: None,
            advance: None,
            radar_calls: Rc::new(Cell::new(0)),
            observe_calls: Rc::new(Cell::new(0)),
            sweeps_with_enemies: Rc::new(Cell::new(0)),
        }
    }

    /// Fire at the same coordinate every turn.
    #[must_use]
    pub fn always_fire_at(mut self, target: GridPos) -> Self {
        self.fire_at = Some(target);
        self
    }

    /// Request the same move every turn.
    #[must_use]
    pub fn always_advance(mut self, direction: Direction, distance: i32) -> Self {
        self.advance = Some(MoveOrder::new(direction, distance));
        self
    }

    /// Request the same radar scan every turn.
    #[must_use]
    pub fn always_scan(mut self, request: RadarRequest) -> Self {
        self.request = request;
        self
    }

    /// Handle to the radar-call counter.
    pub fn radar_calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.radar_calls)
    }

    /// Handle to the observe-call counter.
    pub fn observe_calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.observe_calls)
    }

    /// Handle to the count of sweeps that contained at least one enemy.
    pub fn sweeps_with_enemies(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.sweeps_with_enemies)
    }
}

impl Agent for ScriptedAgent {
    fn chassis(&self) -> Chassis {
        self.chassis.clone()
    }

    fn radar(&mut self, _state: &RobotState) -> RadarRequest {
        self.radar_calls.set(self.radar_calls.get() + 1);
        self.request
    }

    fn observe(&mut self, _state: &RobotState, sweep: &RadarSweep) {
        self.observe_calls.set(self.observe_calls.get() + 1);
        if sweep.found_enemies() {
            self.sweeps_with_enemies
                .set(self.sweeps_with_enemies.get() + 1);
        }
    }

    fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
        self.fire_at
    }

    fn advance(&mut self, _state: &RobotState) -> Option<MoveOrder> {
        self.advance
    }
}

// =============================================================================
// Tests for helpers
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_arena_has_no_terrain() {
        let arena = empty_arena(10, 10, 3);
        assert!(arena
            .board()
            .iter()
            .all(|(_, kind)| kind == crate::grid::CellKind::Empty));
    }

    #[test]
    fn scripted_agent_counts_calls() {
        let mut agent = ScriptedAgent::new(Chassis::new("probe", 2, 2, WeaponKind::Hammer));
        let radar_calls = agent.radar_calls();
        let state = RobotState::new(
            crate::robot::RobotId::new(0),
            agent.chassis(),
            GridPos::new(0, 0),
            (10, 10),
        );

        agent.radar(&state);
        agent.radar(&state);
        assert_eq!(radar_calls.get(), 2);
    }

    #[test]
    fn scripted_agent_repeats_its_script() {
        let mut agent = ScriptedAgent::new(Chassis::new("probe", 2, 2, WeaponKind::Hammer))
            .always_fire_at(GridPos::new(1, 1));
        let state = RobotState::new(
            crate::robot::RobotId::new(0),
            agent.chassis(),
            GridPos::new(0, 0),
            (10, 10),
        );

        assert_eq!(agent.fire(&state), Some(GridPos::new(1, 1)));
        assert_eq!(agent.fire(&state), Some(GridPos::new(1, 1)));
    }
}
