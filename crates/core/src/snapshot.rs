//! Snapshot module - a copyable, serializable view of the engine for hosts

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::shape::{Shape, ShapeGrid};
use crate::types::{ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Row-major grid of color indices
pub type Grid = [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: u8,
    pub x: i8,
    pub y: i8,
    pub cells: ShapeGrid,
}

impl From<Shape> for ActiveSnapshot {
    fn from(value: Shape) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            x: value.x,
            y: value.y,
            cells: value.cells,
        }
    }
}

/// What a renderer needs for one frame.
///
/// `grid` already has the active piece painted over the settled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub tick: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            level: 1,
            tick: 0,
            game_over: false,
        }
    }
}

impl<R> GameEngine<R> {
    /// Fill `out` without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field().write_grid(&mut out.grid);

        if let Some(piece) = self.active() {
            for (r, c) in piece.filled_cells() {
                let row = piece.y + r as i8;
                let col = piece.x + c as i8;
                if (0..FIELD_HEIGHT as i8).contains(&row) && (0..FIELD_WIDTH as i8).contains(&col) {
                    out.grid[row as usize][col as usize] = piece.color;
                }
            }
        }

        out.active = self.active().copied().map(ActiveSnapshot::from);
        out.score = self.score();
        out.lines = self.lines_cleared();
        out.level = self.level();
        out.tick = self.tick_counter();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
