use serde::Serialize;

use crate::stage::{Scenery, Stage, DEFAULT_STAGES};
use crate::types::{Cells, Tile, GRID_SIZE};

/// Read-only view of a session, handed to presentation after every input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub grid: Cells,
    pub score: u32,
    pub game_over: bool,
    pub stage: Stage,
    pub scenery: Scenery,
    /// Score at which the next stage begins, if any.
    pub next_stage_at: Option<u32>,
    pub best_tile: Tile,
    pub moves: u32,
    pub episode_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            game_over: false,
            stage: DEFAULT_STAGES[0],
            scenery: Scenery::default(),
            next_stage_at: None,
            best_tile: 0,
            moves: 0,
            episode_id: 0,
        }
    }
}
