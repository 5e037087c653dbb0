//! Field module - the grid of settled cells
//!
//! The field is a 10x20 grid where each cell holds a color index (0 = empty).
//! Uses a flat array in row-major order for cache locality and zero allocation.
//! Coordinates are (row, col): row 0 is the top, col 0 is the left edge.
//!
//! Line clears are two-phase: [`Field::remove_full_lines`] zeroes full rows in place
//! and [`Field::shift_down`] (run once per tick) later collapses empty rows toward
//! the top.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{EMPTY, FIELD_HEIGHT, FIELD_WIDTH};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;

/// Total number of cells in the field
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// Rows cleared by a single [`Field::remove_full_lines`] call, top to bottom
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The settled-cell grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of color indices, row-major order (row * WIDTH + col)
    cells: [u8; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates.
    ///
    /// Takes `i16` so shape offsets can be added to any `i8` position without overflow.
    #[inline(always)]
    fn index(row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= HEIGHT as i16 || col < 0 || col >= WIDTH as i16 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    /// Field cell covered by shape grid cell (r, c) when the grid sits at (row, col)
    #[inline]
    fn shape_index(row: i8, col: i8, r: usize, c: usize) -> Option<usize> {
        Self::index(i16::from(row) + r as i16, i16::from(col) + c as i16)
    }

    #[inline]
    fn row_slice(&self, row: usize) -> &[u8] {
        &self.cells[row * WIDTH..(row + 1) * WIDTH]
    }

    #[inline]
    fn row_slice_mut(&mut self, row: usize) -> &mut [u8] {
        &mut self.cells[row * WIDTH..(row + 1) * WIDTH]
    }

    /// Get width of the field
    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    /// Get height of the field
    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get the color index at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<u8> {
        Self::index(row.into(), col.into()).map(|idx| self.cells[idx])
    }

    /// Set the color index at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, color: u8) -> bool {
        match Self::index(row.into(), col.into()) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        row < HEIGHT && self.row_slice(row).iter().all(|&c| c != EMPTY)
    }

    /// Check if a row has no settled cell
    pub fn is_row_empty(&self, row: usize) -> bool {
        row < HEIGHT && self.row_slice(row).iter().all(|&c| c == EMPTY)
    }

    /// Whether `shape` fits with its grid's top-left corner at (row, col).
    ///
    /// Every occupied shape cell must land inside the field on an empty cell. A
    /// negative column is rejected upfront; rows below the floor always fail.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        if col < 0 {
            return false;
        }

        shape.filled_cells().all(|(r, c)| {
            Self::shape_index(row, col, r, c).is_some_and(|idx| self.cells[idx] == EMPTY)
        })
    }

    /// Write the shape's color into every cell it covers at its own position.
    ///
    /// Cells outside the field are skipped; callers validate with
    /// [`Field::can_place`] first (or are committing a game-over overlap).
    pub fn place(&mut self, shape: &Shape) {
        for (r, c) in shape.filled_cells() {
            if let Some(idx) = Self::shape_index(shape.y, shape.x, r, c) {
                self.cells[idx] = shape.color;
            }
        }
    }

    /// Collapse empty rows toward the top.
    ///
    /// Scans rows bottom to top; for every row found empty, all rows above it move
    /// down one and row 0 is cleared. The scan does not revisit a row after a shift,
    /// so a run of adjacent empty rows below settled cells may take several passes
    /// to close completely.
    pub fn shift_down(&mut self) {
        for row in (0..HEIGHT).rev() {
            if self.is_row_empty(row) {
                // copy_within handles the overlapping ranges
                self.cells.copy_within(0..row * WIDTH, WIDTH);
                self.row_slice_mut(0).fill(EMPTY);
            }
        }
    }

    /// Zero every full row in place and return the indices that were cleared.
    ///
    /// Rows are not collapsed here; the next [`Field::shift_down`] does that.
    pub fn remove_full_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for row in 0..HEIGHT {
            if self.is_row_full(row) {
                self.row_slice_mut(row).fill(EMPTY);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copy the field into a row-major 2D grid
    pub fn write_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row_slice(row));
        }
    }

    /// Clear the entire field
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
