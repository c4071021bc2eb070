//! Grid module - manages the playfield
//!
//! The grid is a 10x20 matrix where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::pieces::Piece;
use crate::types::{Cell, Rotation, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a single position is within bounds and empty
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `piece`, shifted by `(dx, dy)` and optionally turned to
    /// `rotation`, would sit entirely inside the grid on empty cells.
    ///
    /// Evaluates a hypothetical placement; neither the grid nor the piece changes.
    pub fn is_valid(&self, piece: &Piece, dx: i8, dy: i8, rotation: Option<Rotation>) -> bool {
        piece
            .cells_with(rotation)
            .iter()
            .all(|&(x, y)| self.is_free(x + dx, y + dy))
    }

    /// Write the piece's current cells into the grid, tagged with its kind.
    ///
    /// The caller must have checked `is_valid(piece, 0, 0, None)`.
    pub fn commit(&mut self, piece: &Piece) {
        debug_assert!(
            self.is_valid(piece, 0, 0, None),
            "committing a piece that overlaps or leaves the grid: {:?}",
            piece
        );
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row at once and return how many were removed.
    ///
    /// Surviving rows keep their relative order and sink by the number of
    /// removed rows below them; the same number of empty rows appear at the top.
    /// Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * WIDTH].fill(None);

        cleared
    }

    /// Set every cell empty
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Copy the grid into a 2D array (rows top to bottom)
    pub fn write_rows(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Build a grid from text rows, `.` for empty, a piece letter for filled.
    ///
    /// Rows are bottom-aligned: fewer than 20 lines fill the bottom of the grid.
    /// Unknown characters count as empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(HEIGHT).enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let cell = crate::types::PieceKind::from_str(ch.encode_utf8(&mut [0; 4]));
                grid.set(x as i8, (offset + i) as i8, cell);
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
