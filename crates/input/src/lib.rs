//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] and decodes
//! mouse drags into swipes. Everything here resolves raw input into one of
//! the four directions before the session ever sees it.

pub mod map;
pub mod swipe;

pub use grow_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{swipe_direction, SwipeTracker, DEFAULT_MIN_SWIPE};
