//! Weapon resolver: turns a shot decision into damage on the board.
//!
//! Each weapon kind has its own affected-cell geometry; everything else is
//! shared. A per-shot hit set guarantees that no robot is damaged twice by
//! one shot, however many affected cells map onto it. Target coordinates
//! off the board never match an occupied cell: a wasted shot, not an
//! error.
//!
//! # Damage
//!
//! `base` is drawn uniformly from the weapon's range with the arena's
//! seeded RNG, then mitigated by the target's armor:
//!
//! ```text
//! final = floor(base * (1 - 0.1 * min(armor, 4)))
//! ```
//!
//! Every damaging hit also wears one level off the target's armor, so
//! mitigation decays over a long fight. Mitigation is computed from the
//! armor level before the wear is applied.

use std::collections::BTreeSet;

use rand::Rng;

use crate::grid::{Board, GridPos};
use crate::robot::{RobotId, RobotState, WeaponKind, ARMOR_MITIGATION_CAP};

/// Flamethrower path length in interpolation steps.
const FLAME_STEPS: i32 = 3;

/// Flamethrower cutoff: steps beyond this Euclidean distance from the
/// shooter do not burn.
const FLAME_REACH: f64 = 4.0;

/// Grenade throw cap in Manhattan distance.
const GRENADE_RANGE: i32 = 10;

// =============================================================================
// Shot resolution
// =============================================================================

/// Resolves one shot from `shooter` toward `target`.
///
/// Dispatches on the shooter's equipped weapon. Robots occupying affected
/// cells (the shooter included, if its own geometry folds back onto it)
/// take one mitigated damage roll each.
pub fn resolve_shot<R: Rng + ?Sized>(
    board: &Board,
    roster: &mut [RobotState],
    shooter: RobotId,
    target: GridPos,
    rng: &mut R,
) {
    let origin = roster[shooter.as_usize()].position();
    let weapon = roster[shooter.as_usize()].weapon();
    tracing::debug!(shooter = %shooter, %weapon, %target, "shot fired");

    let mut hit = BTreeSet::new();
    match weapon {
        WeaponKind::Flamethrower => flame_shot(board, roster, origin, target, rng, &mut hit),
        WeaponKind::Railgun => railgun_shot(board, roster, origin, target, rng, &mut hit),
        WeaponKind::Grenade => grenade_shot(board, roster, origin, target, rng, &mut hit),
        WeaponKind::Hammer => hammer_shot(board, roster, origin, target, rng, &mut hit),
        WeaponKind::Emp => emp_pulse(board, roster, shooter, origin, &mut hit),
    }
}

/// One damage roll: uniform base, armor mitigation, floor.
///
/// Armor past [`ARMOR_MITIGATION_CAP`] grants nothing further, so the
/// mitigated result is constant for armor >= 4.
pub fn roll_damage<R: Rng + ?Sized>(weapon: WeaponKind, armor: i32, rng: &mut R) -> i32 {
    let (min, max) = weapon.damage_range();
    if max == 0 {
        return 0;
    }
    let base = rng.gen_range(min..=max);
    mitigate(base, armor)
}

/// Applies the armor multiplier to a base damage value.
#[must_use]
pub fn mitigate(base: i32, armor: i32) -> i32 {
    let multiplier = 1.0 - 0.1 * f64::from(armor.clamp(0, ARMOR_MITIGATION_CAP));
    (f64::from(base) * multiplier).floor() as i32
}

/// Damages the robot at `pos`, if there is one and this shot has not
/// already hit it. Damaging hits wear armor by one level.
fn apply_damage_at<R: Rng + ?Sized>(
    board: &Board,
    roster: &mut [RobotState],
    pos: GridPos,
    weapon: WeaponKind,
    rng: &mut R,
    hit: &mut BTreeSet<RobotId>,
) {
    let Some(id) = board.robot_at(pos) else {
        return;
    };
    if !hit.insert(id) {
        return;
    }
    let target = &mut roster[id.as_usize()];
    let damage = roll_damage(weapon, target.armor(), rng);
    let remaining = target.take_damage(damage);
    target.degrade_armor();
    tracing::debug!(target = %id, damage, remaining, "hit");
}

// =============================================================================
// Per-weapon geometry
// =============================================================================

/// Short-range cone: three interpolated steps toward the target, burning
/// the step cell and its four axis neighbors (a three-wide swath).
fn flame_shot<R: Rng + ?Sized>(
    board: &Board,
    roster: &mut [RobotState],
    origin: GridPos,
    target: GridPos,
    rng: &mut R,
    hit: &mut BTreeSet<RobotId>,
) {
    let slope_row = f64::from(target.row - origin.row) / f64::from(FLAME_STEPS);
    let slope_col = f64::from(target.col - origin.col) / f64::from(FLAME_STEPS);

    let mut r = f64::from(origin.row);
    let mut c = f64::from(origin.col);
    for _ in 0..FLAME_STEPS {
        r += slope_row;
        c += slope_col;
        let step = GridPos::new(r.round() as i32, c.round() as i32);
        if !board.in_bounds(step) || origin.euclidean(step) > FLAME_REACH {
            break;
        }
        apply_damage_at(board, roster, step, WeaponKind::Flamethrower, rng, hit);
        for neighbor in [
            GridPos::new(step.row - 1, step.col),
            GridPos::new(step.row + 1, step.col),
            GridPos::new(step.row, step.col - 1),
            GridPos::new(step.row, step.col + 1),
        ] {
            apply_damage_at(board, roster, neighbor, WeaponKind::Flamethrower, rng, hit);
        }
    }
}

/// Long-range line: dominant-axis unit slope from shooter to the target
/// distance, rounded to the nearest cell each step. Hits everything along
/// the line; no stopping at the first robot.
fn railgun_shot<R: Rng + ?Sized>(
    board: &Board,
    roster: &mut [RobotState],
    origin: GridPos,
    target: GridPos,
    rng: &mut R,
    hit: &mut BTreeSet<RobotId>,
) {
    let delta_row = target.row - origin.row;
    let delta_col = target.col - origin.col;
    let steps = delta_row.abs().max(delta_col.abs());
    if steps == 0 {
        return;
    }
    let slope_row = f64::from(delta_row) / f64::from(steps);
    let slope_col = f64::from(delta_col) / f64::from(steps);

    let mut r = f64::from(origin.row);
    let mut c = f64::from(origin.col);
    for _ in 0..steps {
        r += slope_row;
        c += slope_col;
        let cell = GridPos::new(r.round() as i32, c.round() as i32);
        if !board.in_bounds(cell) {
            break;
        }
        apply_damage_at(board, roster, cell, WeaponKind::Railgun, rng, hit);
    }
}

/// Area blast: the throw is capped at Manhattan range, scaling the target
/// vector back to the cap when exceeded, then the 3x3 block around the
/// impact point is hit.
fn grenade_shot<R: Rng + ?Sized>(
    board: &Board,
    roster: &mut [RobotState],
    origin: GridPos,
    target: GridPos,
    rng: &mut R,
    hit: &mut BTreeSet<RobotId>,
) {
    let impact = clamp_throw(origin, target);
    for dr in -1..=1 {
        for dc in -1..=1 {
            let cell = GridPos::new(impact.row + dr, impact.col + dc);
            apply_damage_at(board, roster, cell, WeaponKind::Grenade, rng, hit);
        }
    }
}

/// Scales an over-range grenade target back onto the range cap.
fn clamp_throw(origin: GridPos, target: GridPos) -> GridPos {
    let distance = origin.manhattan(target);
    if distance <= GRENADE_RANGE {
        return target;
    }
    let factor = f64::from(GRENADE_RANGE) / f64::from(distance);
    GridPos::new(
        origin.row + (f64::from(target.row - origin.row) * factor).round() as i32,
        origin.col + (f64::from(target.col - origin.col) * factor).round() as i32,
    )
}

/// Melee swing: only an adjacent cell (Chebyshev distance 1) can be hit.
fn hammer_shot<R: Rng + ?Sized>(
    board: &Board,
    roster: &mut [RobotState],
    origin: GridPos,
    target: GridPos,
    rng: &mut R,
    hit: &mut BTreeSet<RobotId>,
) {
    if target != origin && origin.chebyshev(target) <= 1 {
        apply_damage_at(board, roster, target, WeaponKind::Hammer, rng, hit);
    }
}

/// Self-centered pulse: burns out the radar of every robot adjacent to
/// the shooter. No health damage; the shooter's own radar is unaffected.
fn emp_pulse(
    board: &Board,
    roster: &mut [RobotState],
    shooter: RobotId,
    origin: GridPos,
    hit: &mut BTreeSet<RobotId>,
) {
    for dr in -1..=1 {
        for dc in -1..=1 {
            let cell = GridPos::new(origin.row + dr, origin.col + dc);
            let Some(id) = board.robot_at(cell) else {
                continue;
            };
            if id == shooter || !hit.insert(id) {
                continue;
            }
            roster[id.as_usize()].disable_radar();
            tracing::debug!(target = %id, "radar disabled by emp");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
