//! Shape module - 4x4 piece occupancy grids and rotation
//!
//! Every piece is a fixed 4x4 grid. Rotation turns the whole grid (not a tight
//! bounding box) and then re-anchors the pattern to the top-left corner.
//!
//! The seven templates are immutable constants; the engine hands out copies, so a
//! rotated or moved active piece never affects future spawns.

use serde::{Deserialize, Serialize};

use crate::types::{ShapeKind, EMPTY, SHAPE_SIZE};

/// Raw occupancy grid. 0 = empty, anything else = occupied.
pub type ShapeGrid = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

const I_GRID: ShapeGrid = [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]];
const O_GRID: ShapeGrid = [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const T_GRID: ShapeGrid = [[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const S_GRID: ShapeGrid = [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const Z_GRID: ShapeGrid = [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const L_GRID: ShapeGrid = [[1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const J_GRID: ShapeGrid = [[1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];

/// Template grid for a shape kind.
///
/// Templates are used as-is on spawn; only a rotation normalizes them (the I bar
/// starts on its second row).
pub fn template(kind: ShapeKind) -> ShapeGrid {
    match kind {
        ShapeKind::I => I_GRID,
        ShapeKind::O => O_GRID,
        ShapeKind::T => T_GRID,
        ShapeKind::S => S_GRID,
        ShapeKind::Z => Z_GRID,
        ShapeKind::L => L_GRID,
        ShapeKind::J => J_GRID,
    }
}

/// A piece: its grid, its color index and its top-left offset in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub cells: ShapeGrid,
    pub color: u8,
    /// Column offset of the grid's left edge
    pub x: i8,
    /// Row offset of the grid's top edge
    pub y: i8,
}

impl Shape {
    /// Fresh copy of a template at (0, 0) with no color assigned yet
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            cells: template(kind),
            color: EMPTY,
            x: 0,
            y: 0,
        }
    }

    /// Whether the grid cell at (row, col) is occupied
    #[inline]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] != EMPTY
    }

    /// Tightest width across occupied columns.
    ///
    /// For each row this is 4 minus the run of trailing empty cells; the widest row wins.
    pub fn width(&self) -> i8 {
        self.cells
            .iter()
            .map(|row| SHAPE_SIZE - row.iter().rev().take_while(|&&v| v == EMPTY).count())
            .max()
            .unwrap_or(0) as i8
    }

    /// Always the full grid height, never tightened to the occupied rows.
    pub fn height(&self) -> i8 {
        SHAPE_SIZE as i8
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != EMPTY).count()
    }

    /// Occupied cells as (row, col) pairs within the grid
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..SHAPE_SIZE).flat_map(move |r| {
            (0..SHAPE_SIZE)
                .filter(move |&c| self.is_filled(r, c))
                .map(move |c| (r, c))
        })
    }

    /// Rotate the whole grid 90° clockwise, then normalize
    pub fn rotate_right(&mut self) {
        let old = self.cells;
        for r in 0..SHAPE_SIZE {
            for c in 0..SHAPE_SIZE {
                self.cells[r][c] = old[SHAPE_SIZE - 1 - c][r];
            }
        }
        self.normalize();
    }

    /// Rotate the whole grid 90° counter-clockwise, then normalize
    pub fn rotate_left(&mut self) {
        let old = self.cells;
        for r in 0..SHAPE_SIZE {
            for c in 0..SHAPE_SIZE {
                self.cells[r][c] = old[c][SHAPE_SIZE - 1 - r];
            }
        }
        self.normalize();
    }

    /// Shift the pattern up while the top row is empty, then left while the left
    /// column is empty.
    ///
    /// Each loop runs at most `SHAPE_SIZE` times, so an all-empty grid is left as is.
    pub fn normalize(&mut self) {
        for _ in 0..SHAPE_SIZE {
            if self.cells[0].iter().any(|&v| v != EMPTY) {
                break;
            }
            self.cells.rotate_left(1);
            self.cells[SHAPE_SIZE - 1] = [EMPTY; SHAPE_SIZE];
        }

        for _ in 0..SHAPE_SIZE {
            if self.cells.iter().any(|row| row[0] != EMPTY) {
                break;
            }
            for row in &mut self.cells {
                row.rotate_left(1);
                row[SHAPE_SIZE - 1] = EMPTY;
            }
        }
    }

    /// Normalized copy, leaving `self` untouched
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }
}
