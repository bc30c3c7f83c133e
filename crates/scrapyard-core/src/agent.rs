//! The strategy contract every robot implements.
//!
//! An [`Agent`] is the brain of one robot. The arena owns a collection of
//! boxed agents and never downcasts; everything it needs flows through
//! this trait. Strategies are independently authored and mutually
//! untrusted in a sporting sense: the arena clamps or ignores any
//! decision value that is out of range, it never rejects a turn.
//!
//! # Turn protocol
//!
//! Each turn the scheduler calls, in order:
//!
//! 1. [`Agent::radar`]: where to point the radar (skipped when the
//!    robot's radar has been disabled);
//! 2. [`Agent::observe`]: delivery of the sweep results;
//! 3. [`Agent::fire`]: `Some(target)` to shoot. Shooting consumes the
//!    turn: a robot that fires is not asked to move.
//! 4. [`Agent::advance`]: a move order, solicited only if the robot did
//!    not fire.
//!
//! All calls receive a read-only snapshot of the robot's own state. An
//! agent never sees the board directly; radar is its only sensor.
//!
//! Decision methods are expected to be total and terminating; the arena
//! runs them on its own thread and has no timeout. A strategy that wants
//! memory (of scans, of targets, of its walk pattern) keeps it in its own
//! fields; the `&mut self` receivers exist for exactly that.

use crate::grid::GridPos;
use crate::movement::MoveOrder;
use crate::radar::{RadarRequest, RadarSweep};
use crate::robot::{Chassis, RobotState};

/// A robot strategy.
///
/// # Example
///
/// ```
/// use scrapyard_core::agent::Agent;
/// use scrapyard_core::grid::GridPos;
/// use scrapyard_core::movement::MoveOrder;
/// use scrapyard_core::radar::{RadarRequest, RadarSweep};
/// use scrapyard_core::robot::{Chassis, RobotState, WeaponKind};
///
/// /// Sits still and hammers anything that comes adjacent.
/// struct Turtle {
///     target: Option<GridPos>,
/// }
///
/// impl Agent for Turtle {
///     fn chassis(&self) -> Chassis {
///         Chassis::new("turtle", 0, 7, WeaponKind::Hammer)
///     }
///
///     fn radar(&mut self, state: &RobotState) -> RadarRequest {
///         RadarRequest::Area(state.position())
///     }
///
///     fn observe(&mut self, state: &RobotState, sweep: &RadarSweep) {
///         self.target = sweep
///             .enemies()
///             .find(|c| state.position().chebyshev(c.pos) <= 1)
///             .map(|c| c.pos);
///     }
///
///     fn fire(&mut self, _state: &RobotState) -> Option<GridPos> {
///         self.target.take()
///     }
///
///     fn advance(&mut self, _state: &RobotState) -> Option<MoveOrder> {
///         None
///     }
/// }
/// ```
pub trait Agent {
    /// The build this strategy wants. Read once at recruitment; the
    /// arena clamps it into the speed/armor budget.
    fn chassis(&self) -> Chassis;

    /// Where to point the radar this turn.
    ///
    /// Not called when the robot's radar is disabled.
    fn radar(&mut self, state: &RobotState) -> RadarRequest;

    /// Delivery of this turn's radar sweep. The sweep is ephemeral;
    /// strategies that want history must copy what they care about.
    fn observe(&mut self, state: &RobotState, sweep: &RadarSweep);

    /// Shot decision: `Some(target)` fires the equipped weapon at that
    /// coordinate and ends the turn. `None` declines.
    fn fire(&mut self, state: &RobotState) -> Option<GridPos>;

    /// Move decision, only solicited when the robot did not fire.
    /// `None` stands still.
    fn advance(&mut self, state: &RobotState) -> Option<MoveOrder>;
}
