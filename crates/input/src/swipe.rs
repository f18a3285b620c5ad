//! Swipe decoding for mouse drags.
//!
//! A drag counts as a swipe once it travels more than the minimum distance
//! along either axis. The longer axis decides the direction; ties go to the
//! vertical axis. Terminal rows grow downward, so a positive `dy` is a
//! downward swipe.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Minimum drag distance in terminal cells.
pub const DEFAULT_MIN_SWIPE: u16 = 2;

/// Resolve a drag delta to a direction, or None for a tap or short drag.
pub fn swipe_direction(dx: i32, dy: i32, min_swipe: u16) -> Option<Direction> {
    let min = i32::from(min_swipe);
    if dx.abs() <= min && dy.abs() <= min {
        return None;
    }
    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Tracks a left-button drag from press to release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    min_swipe: u16,
}

impl SwipeTracker {
    pub fn new(min_swipe: u16) -> Self {
        Self {
            start: None,
            min_swipe,
        }
    }

    /// Feed one mouse event. Returns a direction when a swipe completes.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                let dx = i32::from(event.column) - i32::from(x0);
                let dy = i32::from(event.row) - i32::from(y0);
                swipe_direction(dx, dy, self.min_swipe)
            }
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE)
    }
}
