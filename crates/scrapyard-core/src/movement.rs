//! Movement resolver: advances a robot across the board.
//!
//! A move order names a compass direction and a distance. The resolver
//! clamps the distance to the robot's speed, then walks cell by cell and
//! stops at the first obstruction:
//!
//! - **Mound, wreck, live robot**: impassable; the robot stops on the
//!   last clear cell before them.
//! - **Pit**: the robot falls in. It occupies the pit cell and never
//!   moves again.
//! - **Scorch**: the robot enters, takes a flamethrower damage roll, and
//!   stops there.
//! - **Board edge**: the path clamps at the last on-board cell.
//!
//! Board bookkeeping happens exactly once per resolution, after the final
//! cell is known: clear the origin marker, update the robot's recorded
//! coordinate, mark the destination.
//!
//! Invalid orders (non-positive distance, or a robot whose movement is
//! disabled) are silent no-ops. Invalid direction indices never reach
//! this module: they fail to decode into a [`Direction`] and the turn
//! simply has no move order.

use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::grid::{Board, CellKind, Direction, GridPos};
use crate::robot::{RobotId, RobotState, WeaponKind};
use crate::weapons;

/// A strategy's movement decision for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOrder {
    /// Compass direction to walk in.
    pub direction: Direction,
    /// Requested distance in cells; clamped to the robot's speed.
    pub distance: i32,
}

impl MoveOrder {
    /// Creates a move order.
    #[must_use]
    pub const fn new(direction: Direction, distance: i32) -> Self {
        Self {
            direction,
            distance,
        }
    }
}

/// Resolves one move order for the robot `id`.
///
/// The RNG is only consulted when the robot steps onto burning ground and
/// a damage roll is needed.
pub fn resolve_move<R: Rng + ?Sized>(
    board: &mut Board,
    roster: &mut [RobotState],
    id: RobotId,
    order: MoveOrder,
    rng: &mut R,
) {
    let robot = &roster[id.as_usize()];
    if !robot.is_alive() || !robot.movement_enabled() || order.distance <= 0 {
        return;
    }
    let distance = order.distance.min(robot.speed());
    let origin = robot.position();

    let mut cursor = origin;
    let mut trapped = false;
    let mut burned = false;
    for _ in 0..distance {
        let next = cursor.step(order.direction);
        let Some(cell) = board.get(next) else {
            break; // board edge: clamp and stop
        };
        match cell {
            CellKind::Mound | CellKind::Wreck | CellKind::Robot(_) => break,
            CellKind::Pit => {
                cursor = next;
                trapped = true;
                break;
            }
            CellKind::Scorch => {
                cursor = next;
                burned = true;
                break;
            }
            CellKind::Empty => cursor = next,
        }
    }

    board.relocate(id, origin, cursor);
    let robot = &mut roster[id.as_usize()];
    robot.set_position(cursor);
    tracing::debug!(robot = %id, from = %origin, to = %cursor, "move resolved");

    if trapped {
        robot.disable_movement();
        tracing::info!(robot = %id, at = %cursor, "fell into a pit");
    }
    if burned {
        let damage = weapons::roll_damage(WeaponKind::Flamethrower, robot.armor(), rng);
        let remaining = robot.take_damage(damage);
        robot.degrade_armor();
        tracing::info!(robot = %id, damage, remaining, "crossed burning ground");
    }
}

// =============================================================================
// Tests
// =============================================================================
