//! Scoring module - line-clear points and level
//!
//! A clear of `n` lines at once is worth `5 * n` plus a multi-line bonus:
//!
//! | Lines | Bonus | Total |
//! |-------|-------|-------|
//! | 1 | 0 | 5 |
//! | 2 | 5 | 15 |
//! | 3 | 15 | 30 |
//! | 4 | 35 | 55 |
//! | n > 4 | 10n | 15n |
//!
//! Settling a piece is worth a flat [`PLACEMENT_BONUS`] on top of any clear.

use crate::types::{LINES_PER_LEVEL, LINE_CLEAR_BONUS, LINE_CLEAR_POINTS};

pub use crate::types::PLACEMENT_BONUS;

/// Multi-line bonus for clearing `lines` rows in one placement
pub fn line_clear_bonus(lines: u32) -> u32 {
    match LINE_CLEAR_BONUS.get(lines as usize) {
        Some(&bonus) => bonus,
        None => lines.saturating_mul(10),
    }
}

/// Points for clearing `lines` rows in one placement (0 for no clear)
pub fn line_clear_score(lines: u32) -> u32 {
    LINE_CLEAR_POINTS
        .saturating_mul(lines)
        .saturating_add(line_clear_bonus(lines))
}

/// Advisory level: one level per ten lines, starting at 1
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}
