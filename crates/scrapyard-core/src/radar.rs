//! Radar resolver: how robots sense the board.
//!
//! Radar is the only view a strategy gets of the world. Each turn the
//! scheduler asks the strategy where to look ([`RadarRequest`]), resolves
//! the scan against the board, and hands back an ephemeral [`RadarSweep`].
//! The arena never stores sweeps; a strategy that wants memory of past
//! scans keeps it itself.
//!
//! Two scan modes exist:
//!
//! - **Area**: the 3x3 neighborhood around a requested coordinate,
//!   anywhere on the board. The scanning robot's own cell is skipped.
//! - **Beam**: a full ray from the robot's position along one compass
//!   direction to the board edge. Every non-empty cell on the ray is
//!   reported; the beam does not stop at the first contact, so multiple
//!   objects along a line are all visible.
//!
//! Scanning is a pure read; no scan ever mutates the board.

use serde::{Deserialize, Serialize};

use crate::grid::{Board, CellKind, Direction, GridPos};
use crate::robot::RobotState;

// =============================================================================
// Request and result types
// =============================================================================

/// Where a robot wants its radar pointed this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarRequest {
    /// No scan this turn.
    Off,
    /// 3x3 area scan centered on the given coordinate.
    Area(GridPos),
    /// Full-ray scan from the robot's position in the given direction.
    Beam(Direction),
}

/// What kind of object a radar contact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    /// Another live robot.
    Enemy,
    /// Impassable mound.
    Mound,
    /// Pit trap.
    Pit,
    /// Burning ground.
    Scorch,
    /// Dead robot remains.
    Wreck,
}

/// One sensed object: what it is and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Object classification.
    pub kind: ContactKind,
    /// Board coordinate of the object.
    pub pos: GridPos,
}

/// The result of one radar scan.
///
/// Contacts are listed in scan order (row-major for area scans, near to
/// far for beams).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarSweep {
    contacts: Vec<Contact>,
}

impl RadarSweep {
    /// An empty sweep.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// All contacts in scan order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterates over enemy contacts only.
    pub fn enemies(&self) -> impl Iterator<Item = &Contact> {
        self.contacts
            .iter()
            .filter(|c| c.kind == ContactKind::Enemy)
    }

    /// Iterates over non-enemy contacts (terrain and wrecks).
    pub fn obstacles(&self) -> impl Iterator<Item = &Contact> {
        self.contacts
            .iter()
            .filter(|c| c.kind != ContactKind::Enemy)
    }

    /// `true` if any enemy was sensed.
    #[must_use]
    pub fn found_enemies(&self) -> bool {
        self.enemies().next().is_some()
    }

    /// `true` if any obstacle was sensed.
    #[must_use]
    pub fn found_obstacles(&self) -> bool {
        self.obstacles().next().is_some()
    }
}

// =============================================================================
// Scan resolution
// =============================================================================

/// Resolves a radar request for the given robot.
///
/// Area centers are normalized by [`check_scan_center`] before scanning.
/// The robot's own cell never appears in the result.
#[must_use]
pub fn scan(board: &Board, robot: &RobotState, request: RadarRequest) -> RadarSweep {
    let sweep = match request {
        RadarRequest::Off => RadarSweep::empty(),
        RadarRequest::Area(center) => {
            let center = check_scan_center(board, robot.position(), center);
            area_scan(board, robot, center)
        }
        RadarRequest::Beam(dir) => beam_scan(board, robot, dir),
    };
    tracing::trace!(
        robot = %robot.id(),
        ?request,
        contacts = sweep.contacts().len(),
        "radar scan"
    );
    sweep
}

/// Normalizes an area-scan center.
///
/// Off-board centers are clamped into range. A center that lands on the
/// scanning robot itself would make a degenerate scan of its own cell, so
/// it is redirected to a fixed fallback: the origin, or the far corner
/// when the robot is sitting on the origin.
#[must_use]
pub fn check_scan_center(board: &Board, robot_pos: GridPos, center: GridPos) -> GridPos {
    let center = board.clamp(center);
    if center != robot_pos {
        return center;
    }
    let origin = GridPos::new(0, 0);
    if robot_pos == origin {
        GridPos::new(board.rows() - 1, board.cols() - 1)
    } else {
        origin
    }
}

fn area_scan(board: &Board, robot: &RobotState, center: GridPos) -> RadarSweep {
    let mut contacts = Vec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            let pos = GridPos::new(center.row + dr, center.col + dc);
            if pos == robot.position() {
                continue;
            }
            if let Some(kind) = board.get(pos).and_then(classify) {
                contacts.push(Contact { kind, pos });
            }
        }
    }
    RadarSweep { contacts }
}

fn beam_scan(board: &Board, robot: &RobotState, dir: Direction) -> RadarSweep {
    let mut contacts = Vec::new();
    let mut pos = robot.position().step(dir);
    while board.in_bounds(pos) {
        if let Some(kind) = board.get(pos).and_then(classify) {
            contacts.push(Contact { kind, pos });
        }
        pos = pos.step(dir);
    }
    RadarSweep { contacts }
}

/// Maps a board cell to a contact classification; empty cells are `None`.
const fn classify(cell: CellKind) -> Option<ContactKind> {
    match cell {
        CellKind::Empty => None,
        CellKind::Mound => Some(ContactKind::Mound),
        CellKind::Pit => Some(ContactKind::Pit),
        CellKind::Scorch => Some(ContactKind::Scorch),
        CellKind::Robot(_) => Some(ContactKind::Enemy),
        CellKind::Wreck => Some(ContactKind::Wreck),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{Chassis, RobotId, RobotState, WeaponKind};

    fn robot_at(pos: GridPos) -> RobotState {
        RobotState::new(
            RobotId::new(0),
            Chassis::new("scanner", 2, 2, WeaponKind::Railgun),
            pos,
            (10, 10),
        )
    }

    mod scan_center_tests {
        use super::*;

        #[test]
        fn out_of_bounds_center_is_clamped() {
            let board = Board::new(10, 10);
            let robot_pos = GridPos::new(5, 5);
            assert_eq!(
                check_scan_center(&board, robot_pos, GridPos::new(-4, 30)),
                GridPos::new(0, 9)
            );
        }

        #[test]
        fn self_center_redirects_to_origin() {
            let board = Board::new(10, 10);
            let robot_pos = GridPos::new(5, 5);
            assert_eq!(
                check_scan_center(&board, robot_pos, robot_pos),
                GridPos::new(0, 0)
            );
        }

        #[test]
        fn self_center_at_origin_redirects_to_far_corner() {
            let board = Board::new(10, 10);
            let origin = GridPos::new(0, 0);
            assert_eq!(
                check_scan_center(&board, origin, origin),
                GridPos::new(9, 9)
            );
        }

        #[test]
        fn clamp_landing_on_robot_also_redirects() {
            let board = Board::new(10, 10);
            let robot_pos = GridPos::new(0, 9);
            // (-5, 40) clamps to (0, 9), which is the robot itself.
            assert_eq!(
                check_scan_center(&board, robot_pos, GridPos::new(-5, 40)),
                GridPos::new(0, 0)
            );
        }
    }

    mod area_scan_tests {
        use super::*;

        #[test]
        fn empty_neighborhood_yields_empty_sweep() {
            let board = Board::new(10, 10);
            let robot = robot_at(GridPos::new(9, 9));
            let sweep = scan(&board, &robot, RadarRequest::Area(GridPos::new(4, 4)));
            assert!(sweep.contacts().is_empty());
            assert!(!sweep.found_enemies());
            assert!(!sweep.found_obstacles());
        }

        #[test]
        fn reports_enemies_and_terrain() {
            let mut board = Board::new(10, 10);
            board.set(GridPos::new(3, 3), CellKind::Robot(RobotId::new(1)));
            board.set(GridPos::new(4, 4), CellKind::Mound);
            board.set(GridPos::new(5, 3), CellKind::Pit);

            let robot = robot_at(GridPos::new(9, 9));
            let sweep = scan(&board, &robot, RadarRequest::Area(GridPos::new(4, 3)));

            assert_eq!(sweep.contacts().len(), 3);
            assert_eq!(sweep.enemies().count(), 1);
            assert_eq!(sweep.obstacles().count(), 2);
            assert!(sweep.found_enemies());
        }

        #[test]
        fn own_cell_is_skipped() {
            let mut board = Board::new(10, 10);
            let robot = robot_at(GridPos::new(4, 4));
            board.set(robot.position(), CellKind::Robot(robot.id()));

            // Scan centered one cell off, so the robot's cell is inside
            // the 3x3 neighborhood.
            let sweep = scan(&board, &robot, RadarRequest::Area(GridPos::new(4, 5)));
            assert!(!sweep.found_enemies());
        }

        #[test]
        fn neighborhood_clips_at_board_edge() {
            let mut board = Board::new(10, 10);
            board.set(GridPos::new(0, 1), CellKind::Wreck);
            let robot = robot_at(GridPos::new(5, 5));

            let sweep = scan(&board, &robot, RadarRequest::Area(GridPos::new(0, 0)));
            assert_eq!(sweep.contacts().len(), 1);
            assert_eq!(sweep.contacts()[0].kind, ContactKind::Wreck);
        }
    }

    mod beam_scan_tests {
        use super::*;

        #[test]
        fn beam_sees_everything_along_the_ray() {
            let mut board = Board::new(10, 10);
            board.set(GridPos::new(4, 6), CellKind::Robot(RobotId::new(1)));
            board.set(GridPos::new(4, 8), CellKind::Robot(RobotId::new(2)));
            board.set(GridPos::new(4, 7), CellKind::Mound);

            let robot = robot_at(GridPos::new(4, 4));
            let sweep = scan(&board, &robot, RadarRequest::Beam(Direction::East));

            // The beam does not stop at the first contact.
            assert_eq!(sweep.contacts().len(), 3);
            assert_eq!(sweep.enemies().count(), 2);
            assert_eq!(sweep.contacts()[0].pos, GridPos::new(4, 6));
            assert_eq!(sweep.contacts()[2].pos, GridPos::new(4, 8));
        }

        #[test]
        fn beam_runs_to_the_edge_and_stops() {
            let board = Board::new(5, 5);
            let robot = robot_at(GridPos::new(2, 2));
            let sweep = scan(&board, &robot, RadarRequest::Beam(Direction::NorthWest));
            assert!(sweep.contacts().is_empty());
        }

        #[test]
        fn beam_excludes_own_cell() {
            let mut board = Board::new(5, 5);
            let robot = robot_at(GridPos::new(2, 2));
            board.set(robot.position(), CellKind::Robot(robot.id()));

            let sweep = scan(&board, &robot, RadarRequest::Beam(Direction::South));
            assert!(!sweep.found_enemies());
        }
    }

    mod request_tests {
        use super::*;

        #[test]
        fn off_scans_nothing() {
            let mut board = Board::new(5, 5);
            board.set(GridPos::new(1, 1), CellKind::Robot(RobotId::new(1)));
            let robot = robot_at(GridPos::new(2, 2));
            let sweep = scan(&board, &robot, RadarRequest::Off);
            assert_eq!(sweep, RadarSweep::empty());
        }
    }
}
