//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules and the session that drives them. It
//! has **no dependencies** on terminals, input devices or I/O, which makes it:
//!
//! - **Deterministic**: the same tile source replays the same game
//! - **Testable**: spawns can be scripted tile by tile
//! - **Portable**: any front-end can feed it directions and read snapshots
//! - **Allocation-light**: grids are `Copy` arrays and rows compact on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: the 4x4 tile matrix and the "any move left?" predicate
//! - [`engine`]: move/merge via canonical orientation, spawn, initialize
//! - [`rng`]: the injectable [`TileSource`] plus seeded and scripted sources
//! - [`stage`]: growth stages keyed by cumulative score
//! - [`session`]: the controller owning grid, score and game-over state
//! - [`snapshot`]: the read-only view handed to presentation
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes toward one edge
//! - Two equal neighbours merge into their sum, at most once per tile per move
//! - Each merge scores the merged value
//! - After a move that changed the grid, one tile spawns: 2 (90%) or 4 (10%)
//! - The game ends when no cell is empty and no neighbours match
//!
//! # Example
//!
//! ```
//! use grow_2048_core::{SeededRng, Session};
//! use grow_2048_types::Direction;
//!
//! let mut session = Session::new(SeededRng::new(12345));
//! assert_eq!(session.grid().count_filled(), 2);
//!
//! for dir in Direction::ALL {
//!     session.apply_move(dir);
//! }
//!
//! let snap = session.snapshot();
//! assert_eq!(snap.score, session.score());
//! ```

pub mod engine;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stage;

pub use grow_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{apply_move, has_available_move, initialize, slide_line, spawn, MoveResult};
pub use grid::{Grid, GridError};
pub use rng::{ScriptedSource, SeededRng, TileSource};
pub use session::{MoveOutcome, Session};
pub use snapshot::GameSnapshot;
pub use stage::{Scenery, Stage, StageTable, StageTableError, DEFAULT_STAGES};
