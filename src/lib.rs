//! Grow 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `grow_2048::{core, input, term, types}`
//! and hosts the runtime [`config`] shared by the binary.

pub mod config;

pub use grow_2048_core as core;
pub use grow_2048_input as input;
pub use grow_2048_term as term;
pub use grow_2048_types as types;

pub use config::Config;
