//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::animation::SlideAnimation;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TerminalState, GRID_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background color for a tile value; anything past 2048 reuses the 2048 color.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        _ => Rgb::new(237, 194, 46),
    }
}

fn tile_style(value: u32) -> CellStyle {
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, tile_color(value)).bold()
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for "2048" plus padding; 7x3 looks roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render a settled board into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let origin = self.draw_frame(fb, viewport);
        self.draw_grid(fb, origin, &snap.grid);
        self.draw_side_panel(fb, snap, viewport, origin);
        self.draw_overlay(fb, snap.state, origin);
    }

    /// Render a board mid-slide.
    ///
    /// `snap` is the post-move state (score, status); tiles come from the
    /// animation until it finishes.
    pub fn render_animated_into(
        &self,
        snap: &GameSnapshot,
        anim: &SlideAnimation,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let origin = self.draw_frame(fb, viewport);
        self.draw_grid(fb, origin, anim.resting());

        let progress = anim.progress();
        for track in anim.tracks() {
            let (row, col) = track.position_at(progress);
            let px = origin.0 + 1 + (col * self.cell_w as f32).round() as u16;
            let py = origin.1 + 1 + (row * self.cell_h as f32).round() as u16;
            self.draw_tile_at(fb, px, py, track.value);
        }

        self.draw_side_panel(fb, snap, viewport, origin);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Clear, draw the border, and return the frame's top-left corner.
    fn draw_frame(&self, fb: &mut FrameBuffer, viewport: Viewport) -> (u16, u16) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(BOARD_BG, Rgb::new(0, 0, 0));
        fb.put_char(x, y, '┌', border);
        fb.put_char(x + frame_w - 1, y, '┐', border);
        fb.put_char(x, y + frame_h - 1, '└', border);
        fb.put_char(x + frame_w - 1, y + frame_h - 1, '┘', border);
        for dx in 1..frame_w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + frame_h - 1, '─', border);
        }
        for dy in 1..frame_h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + frame_w - 1, y + dy, '│', border);
        }

        (x, y)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, origin: (u16, u16), grid: &[[u32; GRID_SIZE]; GRID_SIZE]) {
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let px = origin.0 + 1 + col as u16 * self.cell_w;
                let py = origin.1 + 1 + row as u16 * self.cell_h;
                if value == 0 {
                    let style = CellStyle::new(BOARD_BG, EMPTY_BG);
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                    fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
                } else {
                    self.draw_tile_at(fb, px, py, value);
                }
            }
        }
    }

    fn draw_tile_at(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: u32) {
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        let mut digits = [0u8; 10];
        let label = crate::fb::format_u32(value, &mut digits);
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, label, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, origin: (u16, u16)) {
        let (frame_w, _) = self.frame_size();
        let panel_x = origin.0.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = origin.1;
        for (name, number) in [("SCORE", snap.score), ("MOVES", snap.moves), ("BEST", snap.best_tile)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        let hint = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        fb.put_str(panel_x, y, "arrows/wasd", hint);
        fb.put_str(panel_x, y.saturating_add(1), "r restart", hint);
        fb.put_str(panel_x, y.saturating_add(2), "q quit", hint);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, state: TerminalState, origin: (u16, u16)) {
        let text = match state {
            TerminalState::InProgress => return,
            TerminalState::Won => " YOU WIN! ",
            TerminalState::Lost => " GAME OVER ",
        };
        let (frame_w, frame_h) = self.frame_size();
        let mid_y = origin.1.saturating_add(frame_h / 2);
        let banner = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(origin.0, mid_y, frame_w, text, banner);
        fb.put_str_centered(origin.0, mid_y.saturating_add(1), frame_w, " r: new game ", banner);
    }
}
