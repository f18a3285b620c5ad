//! Grid module - the 4x4 tile matrix
//!
//! Cells are stored as a fixed `[[Tile; 4]; 4]` array, so the grid is `Copy`
//! and its dimensions cannot drift. Coordinates are `(row, col)` with row 0 at
//! the top and col 0 at the left. A value of 0 marks an empty cell.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{is_valid_tile, Cells, Tile, CELL_COUNT, GRID_SIZE, MAX_TILE};

/// Errors raised when building a grid from untrusted data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have {expected} rows, got {actual}")]
    Dimension { expected: usize, actual: usize },
    #[error("row {row} must have {expected} cells, got {actual}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error(
        "cell ({row}, {col}) holds {value}, which is not 0 or a power of two from 2 to {max}",
        max = MAX_TILE
    )]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// The playing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    pub(crate) cells: Cells,
}

impl Grid {
    /// Create an empty grid.
    pub const fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from rows, rejecting values a tile can never hold.
    pub fn from_rows(rows: Cells) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get the value at `(row, col)`, or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Set the value at `(row, col)`.
    /// Returns false if out of bounds or the value is not a legal tile
    /// (see [`is_valid_tile`]).
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(0)
    }

    /// Empty positions in row-major order. Stack-only.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn count_filled(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Largest tile on the grid (0 when empty).
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles. Moves preserve it; spawns add to it.
    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    /// True if some move could still change the grid: an empty cell exists,
    /// or two orthogonally adjacent cells hold the same non-zero value.
    pub fn has_available_move(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let v = self.cells[row][col];
                if v == 0 {
                    return true;
                }
                if col + 1 < GRID_SIZE && self.cells[row][col + 1] == v {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[row + 1][col] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Copy the cells into an existing array (snapshot hot path).
    pub fn write_cells(&self, out: &mut Cells) {
        *out = self.cells;
    }
}

impl TryFrom<&[Vec<Tile>]> for Grid {
    type Error = GridError;

    fn try_from(rows: &[Vec<Tile>]) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::Dimension {
                expected: GRID_SIZE,
                actual: rows.len(),
            });
        }
        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in rows.iter().enumerate() {
            if line.len() != GRID_SIZE {
                return Err(GridError::RowLength {
                    row,
                    expected: GRID_SIZE,
                    actual: line.len(),
                });
            }
            cells[row].copy_from_slice(line);
        }
        Grid::from_rows(cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in line.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}
