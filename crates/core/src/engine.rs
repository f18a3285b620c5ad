//! Engine module - move, merge, spawn and terminal detection
//!
//! Every direction is handled by one routine. A move first maps the grid
//! into the *canonical orientation*, where tiles always slide left, then
//! slides each row and maps the result back. The mapping is pure index
//! arithmetic ([`canonical_to_grid`]); no rotated copy of the grid is built.
//!
//! The engine holds no state. Callers own the grid and the tile source.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::TileSource;
use crate::types::{Direction, Tile, GRID_SIZE, SPAWN_TILES, START_TILES};

/// Outcome of sliding a grid in one direction (no spawn applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    /// Sum of every tile produced by a merge during this move.
    pub points: u32,
    /// True if at least one cell changed.
    pub moved: bool,
}

/// Map `(row, col)` in canonical orientation to `(row, col)` on the grid.
///
/// Canonical orientation is reached by rotating the grid clockwise
/// `direction.quarter_turns()` times; each turn sends canonical `(r, c)` to
/// `(N-1-c, r)` in the layer beneath it.
#[inline]
pub fn canonical_to_grid(direction: Direction, row: usize, col: usize) -> (usize, usize) {
    let last = GRID_SIZE - 1;
    let (mut r, mut c) = (row, col);
    for _ in 0..direction.quarter_turns() {
        (r, c) = (last - c, r);
    }
    (r, c)
}

/// Slide one canonical row to the left, merging equal neighbours once.
///
/// Returns the new row and the points earned. A merged tile does not merge
/// again in the same pass: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, and
/// `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`.
pub fn slide_line(line: [Tile; GRID_SIZE]) -> ([Tile; GRID_SIZE], u32) {
    let tiles: ArrayVec<Tile, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; GRID_SIZE];
    let mut points = 0;
    let mut write = 0;
    let mut read = 0;
    while read < tiles.len() {
        let value = tiles[read];
        if read + 1 < tiles.len() && tiles[read + 1] == value {
            let merged = value * 2;
            out[write] = merged;
            points += merged;
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }
    (out, points)
}

/// Slide every tile of `grid` toward `direction`.
///
/// The input is untouched. Spawning is left to the caller, and must only
/// happen when [`MoveResult::moved`] is true.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let mut out = Grid::new();
    let mut points = 0;
    let mut moved = false;

    for row in 0..GRID_SIZE {
        let mut line = [0; GRID_SIZE];
        for (col, slot) in line.iter_mut().enumerate() {
            let (r, c) = canonical_to_grid(direction, row, col);
            *slot = grid.cells[r][c];
        }

        let (slid, gained) = slide_line(line);
        moved |= slid != line;
        points += gained;

        for (col, &value) in slid.iter().enumerate() {
            let (r, c) = canonical_to_grid(direction, row, col);
            out.cells[r][c] = value;
        }
    }

    MoveResult {
        grid: out,
        points,
        moved,
    }
}

/// Place one random tile (2 at 90%, 4 at 10%) on a random empty cell.
///
/// Returns the filled position, or None when the grid is full.
pub fn spawn<S: TileSource + ?Sized>(grid: &mut Grid, source: &mut S) -> Option<(usize, usize)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[source.pick_index(empty.len())];
    let weights = SPAWN_TILES.map(|(_, weight)| weight);
    let value = SPAWN_TILES[source.pick_weighted(&weights)].0;
    grid.cells[row][col] = value;

    log::debug!("spawned {} at ({}, {})", value, row, col);
    Some((row, col))
}

/// A fresh grid holding two spawned tiles on distinct cells.
pub fn initialize<S: TileSource + ?Sized>(source: &mut S) -> Grid {
    let mut grid = Grid::new();
    for _ in 0..START_TILES {
        spawn(&mut grid, source);
    }
    grid
}

/// True while some direction could still change the grid.
pub fn has_available_move(grid: &Grid) -> bool {
    grid.has_available_move()
}
