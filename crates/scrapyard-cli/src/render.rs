//! Console rendering of the arena.
//!
//! Pure formatting over the core's read accessors: one glyph per cell,
//! a round header, and a roster stat block. The engine itself never
//! prints.

use scrapyard_core::{Arena, Verdict};

/// Renders the board as a block of glyphs with a round header.
///
/// `.` empty, `M` mound, `P` pit, `F` burning ground, `R` robot,
/// `X` wreck.
#[must_use]
pub fn board_snapshot(arena: &Arena) -> String {
    let board = arena.board();
    let mut out = String::new();
    out.push_str(&format!("=== round {} ===\n", arena.round()));
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let glyph = board
                .get(scrapyard_core::GridPos::new(row, col))
                .map_or(' ', |kind| kind.glyph());
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Renders one stat line per robot, in turn order.
#[must_use]
pub fn roster_summary(arena: &Arena) -> String {
    let mut out = String::new();
    for state in arena.roster() {
        let condition = if !state.is_alive() {
            " [destroyed]"
        } else if !state.radar_enabled() {
            " [radar jammed]"
        } else {
            ""
        };
        out.push_str(&format!(
            "{}: {} hp={} armor={} weapon={} at {}{}\n",
            state.id(),
            state.name(),
            state.health(),
            state.armor(),
            state.weapon(),
            state.position(),
            condition,
        ));
    }
    out
}

/// Renders the final verdict line.
#[must_use]
pub fn verdict_line(arena: &Arena, verdict: Verdict) -> String {
    match verdict {
        Verdict::Champion(id) => {
            let name = arena
                .roster()
                .get(id.as_usize())
                .map_or("unknown", |s| s.name());
            format!(
                "{name} wins after {} round(s) with {} health left",
                arena.round(),
                arena
                    .roster()
                    .get(id.as_usize())
                    .map_or(0, scrapyard_core::RobotState::health)
            )
        }
        Verdict::Stalemate => format!("stalemate after {} round(s)", arena.round()),
    }
}
