//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the sky backdrop of the current growth stage fills
//! the whole viewport, the 4x4 board sits on top of it, and a side panel
//! shows score, stage and a growth meter when there is room.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(40, 40, 50);
const EMPTY_BG: Rgb = Rgb::new(60, 60, 72);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const DARK_TEXT: Rgb = Rgb::new(50, 50, 50);
const LIGHT_TEXT: Rgb = Rgb::new(255, 255, 255);

/// Terminal renderer for the game board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns (including the 1-column gutter).
    cell_w: u16,
    /// Board cell height in terminal rows (including the 1-row gutter).
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x4 leaves 6x3 per tile: wide enough for six digits.
        Self {
            cell_w: 7,
            cell_h: 4,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
        }
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * self.cell_w + 1 + 2, n * self.cell_h + 1 + 2)
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        self.draw_backdrop(fb, snap, viewport);

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::on(Rgb::new(200, 200, 200), BOARD_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::on(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, line) in snap.grid.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w, start_y);

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_backdrop(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let top = Rgb::from_array(snap.stage.sky[0]);
        let bottom = Rgb::from_array(snap.stage.sky[1]);
        let span = viewport.height.saturating_sub(1).max(1) as u32;

        for y in 0..viewport.height {
            let t = (y as u32 * 255 / span) as u8;
            let sky = top.blend(bottom, t);
            fb.fill_rect(0, y, viewport.width, 1, ' ', CellStyle::on(sky, sky));
        }

        let sky_at = |y: u16| top.blend(bottom, (y as u32 * 255 / span) as u8);
        if snap.scenery.clouds && viewport.height > 2 {
            let style = CellStyle::on(Rgb::new(250, 250, 250), sky_at(1));
            fb.put_char(viewport.width / 6, 1, '☁', style);
            fb.put_char(viewport.width.saturating_mul(5) / 6, 1, '☁', style);
        }
        if snap.scenery.stars {
            let style = CellStyle::on(Rgb::new(255, 240, 160), sky_at(0));
            let w = viewport.width;
            for x in [w / 4, w / 2, w.saturating_mul(3) / 4] {
                fb.put_char(x, 0, '✦', style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: Tile,
    ) {
        // Inside the border there is a one-cell gutter before every tile.
        let px = start_x + 2 + col * self.cell_w;
        let py = start_y + 2 + row * self.cell_h;
        let tw = self.cell_w - 1;
        let th = self.cell_h - 1;

        if value == 0 {
            fb.fill_rect(px, py, tw, th, ' ', CellStyle::on(EMPTY_BG, EMPTY_BG));
            return;
        }

        let bg = tile_color(value);
        let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
        let style = CellStyle::on(fg, bg).bold();
        fb.fill_rect(px, py, tw, th, ' ', style);

        let mut digits = [0u8; 10];
        let label = format_tile(value, &mut digits);
        fb.put_str_centered(px, py + (th - 1) / 2, tw, label, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::on(Rgb::new(230, 230, 230), PANEL_BG).bold();
        let value = CellStyle::on(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STAGE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.stage.zone, value);
        y = y.saturating_add(1);
        if let Some(next) = snap.next_stage_at {
            let dim = value.dim();
            fb.put_str(panel_x, y, "next @", dim);
            fb.put_u32(panel_x + 7, y, next, dim);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GROWTH", label);
        y = y.saturating_add(1);
        let bar_w = panel_w.min(20);
        let filled = (bar_w as u32 * snap.stage.height_pct as u32 / 100) as u16;
        let meter = CellStyle::on(Rgb::new(120, 220, 140), PANEL_BG);
        fb.fill_rect(panel_x, y, filled, 1, '█', meter);
        fb.fill_rect(panel_x + filled, y, bar_w - filled, 1, '░', value.dim());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        if y < viewport.height {
            fb.put_str(panel_x, y, "arrows/wasd  r  q", value.dim());
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, w: u16, h: u16) {
        let style = CellStyle::on(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y.saturating_add(h / 2);
        fb.put_str_centered(start_x, mid_y.saturating_sub(1), w, " GAME OVER ", style);
        fb.put_str_centered(start_x, mid_y, w, " r to restart ", style);
    }
}

/// Tile background colour.
pub fn tile_color(value: Tile) -> Rgb {
    match value {
        2 => Rgb::new(0xa8, 0xe6, 0xcf),
        4 => Rgb::new(0x88, 0xd8, 0xb0),
        8 => Rgb::new(0x6c, 0xc9, 0xa1),
        16 => Rgb::new(0x4d, 0xb8, 0x92),
        32 => Rgb::new(0xff, 0xd9, 0x3d),
        64 => Rgb::new(0xff, 0xb3, 0x47),
        128 => Rgb::new(0xff, 0x82, 0x43),
        256 => Rgb::new(0xff, 0x6b, 0x6b),
        512 => Rgb::new(0xc4, 0x45, 0x69),
        1024 => Rgb::new(0x9b, 0x59, 0xb6),
        _ => Rgb::new(0x8e, 0x44, 0xad),
    }
}

fn format_tile(value: Tile, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("?")
}
