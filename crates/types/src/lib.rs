//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they are usable from the engine,
//! the terminal front-end, and tests alike.
//!
//! # Grid Dimensions
//!
//! - **Size**: 4x4 cells (indexed `[row][col]`, row 0 at the top)
//! - **Start tiles**: 2 tiles placed when a game begins
//!
//! # Spawn Distribution
//!
//! | Tile | Weight | Probability |
//! |------|--------|-------------|
//! | 2 | 9 | 90% |
//! | 4 | 1 | 10% |
//!
//! # Examples
//!
//! ```
//! use grow_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! let action: GameAction = "restart".parse().unwrap();
//! assert_eq!(action, GameAction::Restart);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grid edge length in cells.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of tiles placed on a fresh grid.
pub const START_TILES: usize = 2;

/// Tile values a spawn can produce, paired with their relative weights.
pub const SPAWN_TILES: [(Tile, u32); 2] = [(2, 9), (4, 1)];

/// A cell value: 0 for empty, otherwise a power of two no less than 2.
pub type Tile = u32;

/// Largest tile a grid accepts from outside the engine: 2^17, the highest
/// tile a 4x4 game can build. Merges may go past it, but a grid seeded at
/// this cap stays far below `u32::MAX` for any number of moves.
pub const MAX_TILE: Tile = 1 << 17;

/// Rows of a grid in plain array form (row-major, row 0 at the top).
pub type Cells = [[Tile; GRID_SIZE]; GRID_SIZE];

/// Returns true for values a grid may be built with.
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// One of the four directions tiles can be shifted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns that bring this direction onto "left".
    ///
    /// ```
    /// use grow_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.quarter_turns(), 0);
    /// assert_eq!(Direction::Right.quarter_turns(), 2);
    /// ```
    pub fn quarter_turns(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name one of the four directions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a direction (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Actions the session controller accepts.
///
/// Front-ends resolve keys, mouse drags or any other raw input into one of
/// these before handing it to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameAction {
    /// Shift every tile in the given direction
    Move(Direction),
    /// Throw the current grid away and start over
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

impl From<Direction> for GameAction {
    fn from(dir: Direction) -> Self {
        GameAction::Move(dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for GameAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("restart") {
            return Ok(GameAction::Restart);
        }
        s.parse::<Direction>()
            .map(GameAction::Move)
            .map_err(|_| ParseActionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_weights_favor_twos() {
        let total: u32 = SPAWN_TILES.iter().map(|&(_, w)| w).sum();
        assert_eq!(total, 10);
        assert_eq!(SPAWN_TILES[0], (2, 9));
        assert_eq!(SPAWN_TILES[1], (4, 1));
    }

    #[test]
    fn tile_validity() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(2048));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(3));
        assert!(!is_valid_tile(6));
    }

    #[test]
    fn tile_validity_is_capped() {
        assert!(is_valid_tile(MAX_TILE));
        assert!(!is_valid_tile(MAX_TILE * 2));
        assert!(!is_valid_tile(1 << 31));
    }

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("Right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(ParseDirectionError("sideways".to_string()))
        );
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn quarter_turns_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            let t = dir.quarter_turns() as usize;
            assert!(!seen[t]);
            seen[t] = true;
        }
    }

    #[test]
    fn action_parse() {
        assert_eq!("restart".parse::<GameAction>(), Ok(GameAction::Restart));
        assert_eq!(
            "down".parse::<GameAction>(),
            Ok(GameAction::Move(Direction::Down))
        );
        assert!("hold".parse::<GameAction>().is_err());
        assert_eq!(GameAction::from(Direction::Up).as_str(), "up");
    }
}
