//! Terminal rendering for the 2048 board.
//!
//! A small, game-oriented layer: [`GameView`] paints a snapshot into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes only the cells that
//! changed since the previous frame. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use grow_2048_core as core;
pub use grow_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
