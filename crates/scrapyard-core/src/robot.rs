//! Robot identity, hardware, and mutable combat state.
//!
//! A robot in the arena is split in two: the *strategy* (an
//! [`Agent`](crate::agent::Agent) trait object that makes decisions) and
//! the *state* defined here, which the arena owns and the resolvers
//! mutate. Strategies only ever see `&RobotState` snapshots.
//!
//! # The build budget
//!
//! Speed and armor trade off against each other: speed is clamped to
//! `0..=4` and armor to `0..=(7 - speed)`. A fast robot is thin-skinned,
//! a tank is slow. [`Chassis::new`] applies the clamps so no strategy can
//! declare an over-budget build.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::GridPos;

/// Starting health for every robot.
pub const INITIAL_HEALTH: i32 = 100;

/// Upper bound on speed.
pub const MAX_SPEED: i32 = 4;

/// Combined speed + armor budget.
pub const BUILD_BUDGET: i32 = 7;

/// Armor levels past this grant no further mitigation.
pub const ARMOR_MITIGATION_CAP: i32 = 4;

// =============================================================================
// RobotId
// =============================================================================

/// Identifier of a robot within a run.
///
/// Ids are assigned in recruitment order and double as the index into the
/// arena's roster, which also fixes the turn order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RobotId(u32);

impl RobotId {
    /// Creates an id from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw roster index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobotId({})", self.0)
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// WeaponKind
// =============================================================================

/// The fixed weapon catalog.
///
/// Each kind pairs a damage range with a distinct targeting geometry
/// (see [`weapons`](crate::weapons)): short range and wide, long range
/// and narrow, area, melee, or a self-centered pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Short-range cone of fire, three steps deep and three cells wide.
    Flamethrower,
    /// Full-length piercing line; hits everything along it.
    Railgun,
    /// Lobbed area blast, 3x3 around the point of impact.
    Grenade,
    /// Melee swing at an adjacent cell.
    Hammer,
    /// Self-centered pulse that burns out nearby radar instead of armor.
    Emp,
}

impl WeaponKind {
    /// Inclusive `(min, max)` base damage for one hit.
    ///
    /// The emp deals no health damage; its payload is radar denial.
    #[must_use]
    pub const fn damage_range(self) -> (i32, i32) {
        match self {
            Self::Flamethrower => (30, 50),
            Self::Railgun => (10, 20),
            Self::Grenade => (10, 40),
            Self::Hammer => (50, 60),
            Self::Emp => (0, 0),
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flamethrower => "flamethrower",
            Self::Railgun => "railgun",
            Self::Grenade => "grenade",
            Self::Hammer => "hammer",
            Self::Emp => "emp",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// StatusFlags
// =============================================================================

bitflags! {
    /// Condition bits on a robot. Flags only ever get set, never cleared:
    /// a trapped robot stays trapped and a dead robot stays dead.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct StatusFlags: u8 {
        /// Movement permanently disabled (fell into a pit).
        const MOVEMENT_DISABLED = 1 << 0;
        /// Radar permanently disabled (caught in an emp pulse).
        const RADAR_DISABLED = 1 << 1;
        /// Health reached zero.
        const DESTROYED = 1 << 2;
    }
}

// =============================================================================
// Chassis
// =============================================================================

/// A robot's declared hardware: name, speed, armor, weapon.
///
/// Supplied once by the strategy at recruitment and clamped to the build
/// budget; the mutable run state derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chassis {
    /// Display name.
    pub name: String,
    /// Cells per move order, `0..=4`.
    pub speed: i32,
    /// Starting armor level, `0..=(7 - speed)`.
    pub armor: i32,
    /// Equipped weapon.
    pub weapon: WeaponKind,
}

impl Chassis {
    /// Builds a chassis, clamping speed and armor into the budget.
    #[must_use]
    pub fn new(name: impl Into<String>, speed: i32, armor: i32, weapon: WeaponKind) -> Self {
        let speed = speed.clamp(0, MAX_SPEED);
        let armor = armor.clamp(0, BUILD_BUDGET - speed);
        Self {
            name: name.into(),
            speed,
            armor,
            weapon,
        }
    }
}

// =============================================================================
// RobotState
// =============================================================================

/// The arena-owned mutable state of one robot.
///
/// Created at recruitment, mutated by the resolvers every turn the robot
/// acts, and never removed from the roster: death is a continuing state
/// (health 0, [`StatusFlags::DESTROYED`]), not a removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotState {
    id: RobotId,
    chassis: Chassis,
    health: i32,
    armor: i32,
    position: GridPos,
    bounds: (i32, i32),
    flags: StatusFlags,
}

impl RobotState {
    /// Creates the run state for a freshly recruited robot.
    ///
    /// # Arguments
    ///
    /// * `id` - Roster id assigned by the arena
    /// * `chassis` - The (already clamped) declared build
    /// * `position` - Starting cell chosen by the arena
    /// * `bounds` - Arena `(rows, cols)`, so strategies can reason about
    ///   the edges
    #[must_use]
    pub fn new(id: RobotId, chassis: Chassis, position: GridPos, bounds: (i32, i32)) -> Self {
        let armor = chassis.armor;
        Self {
            id,
            chassis,
            health: INITIAL_HEALTH,
            armor,
            position,
            bounds,
            flags: StatusFlags::empty(),
        }
    }

    /// Roster id.
    #[must_use]
    pub const fn id(&self) -> RobotId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.chassis.name
    }

    /// Current health, `0..=100`.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Current armor level. Degrades as hits land.
    #[must_use]
    pub const fn armor(&self) -> i32 {
        self.armor
    }

    /// Move speed in cells per order.
    #[must_use]
    pub const fn speed(&self) -> i32 {
        self.chassis.speed
    }

    /// Equipped weapon.
    #[must_use]
    pub const fn weapon(&self) -> WeaponKind {
        self.chassis.weapon
    }

    /// Current cell.
    #[must_use]
    pub const fn position(&self) -> GridPos {
        self.position
    }

    /// Arena dimensions as `(rows, cols)`.
    #[must_use]
    pub const fn bounds(&self) -> (i32, i32) {
        self.bounds
    }

    /// Condition flags.
    #[must_use]
    pub const fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// `true` while health is above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// `true` when the robot may still receive move orders.
    #[must_use]
    pub fn movement_enabled(&self) -> bool {
        !self.flags.contains(StatusFlags::MOVEMENT_DISABLED)
    }

    /// `true` when the robot still gets radar sweeps.
    #[must_use]
    pub fn radar_enabled(&self) -> bool {
        !self.flags.contains(StatusFlags::RADAR_DISABLED)
    }

    /// Applies damage, flooring health at zero. Returns remaining health.
    ///
    /// Sets [`StatusFlags::DESTROYED`] when health reaches the floor; the
    /// caller is responsible for the board-side wreck marker.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.flags.insert(StatusFlags::DESTROYED);
        }
        self.health
    }

    /// Wears one level off the armor, flooring at zero.
    pub fn degrade_armor(&mut self) {
        self.armor = (self.armor - 1).max(0);
    }

    /// Permanently disables movement.
    pub fn disable_movement(&mut self) {
        self.flags.insert(StatusFlags::MOVEMENT_DISABLED);
    }

    /// Permanently disables radar.
    pub fn disable_radar(&mut self) {
        self.flags.insert(StatusFlags::RADAR_DISABLED);
    }

    /// Records a new position. Board bookkeeping is the resolvers' job;
    /// this only updates the robot's own record.
    pub fn set_position(&mut self, pos: GridPos) {
        self.position = pos;
    }
}

// =============================================================================
// Tests
// =============================================================================
