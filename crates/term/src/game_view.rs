//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorIndex, COLOR_COUNT, EMPTY};

/// Color table indexed by [`ColorIndex`]; entry 0 is the empty background.
pub const PALETTE: [Rgb; COLOR_COUNT] = [
    Rgb::from_hex(0x000000),
    Rgb::from_hex(0xFFFF00),
    Rgb::from_hex(0x00FFFF),
    Rgb::from_hex(0x800080),
    Rgb::from_hex(0xFFA500),
    Rgb::from_hex(0x0000FF),
    Rgb::from_hex(0x00FF00),
    Rgb::from_hex(0xFF0000),
];

const GRID_LINE: Rgb = Rgb::from_hex(0xCCCCCC);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HELP: CellStyle = CellStyle {
    fg: Rgb::new(140, 140, 140),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: true,
};

const BLOCK: char = '█';
const GRID_DOT: char = '·';
const HELP_TEXT: &str = "←→ move  ↓ drop  ↑ rotate  q quit";

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

/// Draws the playfield: frame, background grid, frozen cells, active piece.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self, state: &GameState) -> (u16, u16) {
        let board = state.board();
        (
            board.width() as u16 * self.cell_w + 2,
            board.height() as u16 * self.cell_h + 2,
        )
    }

    /// Render the current game state into a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(state);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let board = state.board();
        for (y, row) in board.rows().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, color);
            }
        }

        let active = state.active();
        let color = active.color_index();
        for (x, y) in active.cells() {
            // Cells above the top edge are not visible yet.
            if y >= 0 && (x as usize) < board.width() && (y as usize) < board.height() {
                self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, color);
            }
        }

        let help_y = origin_y.saturating_add(frame_h);
        if help_y < viewport.height {
            let help_w = HELP_TEXT.chars().count() as u16;
            let help_x = viewport.width.saturating_sub(help_w) / 2;
            fb.put_str(help_x, help_y, HELP_TEXT, HELP);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.set(x, y, BORDER.cell('┌'));
        fb.set(right, y, BORDER.cell('┐'));
        fb.set(x, bottom, BORDER.cell('└'));
        fb.set(right, bottom, BORDER.cell('┘'));
        for dx in x + 1..right {
            fb.set(dx, y, BORDER.cell('─'));
            fb.set(dx, bottom, BORDER.cell('─'));
        }
        for dy in y + 1..bottom {
            fb.set(x, dy, BORDER.cell('│'));
            fb.set(right, dy, BORDER.cell('│'));
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        color: ColorIndex,
    ) {
        let bg = PALETTE[EMPTY as usize];
        let cell = if color == EMPTY {
            CellStyle {
                dim: true,
                ..CellStyle::new(GRID_LINE, bg)
            }
            .cell(GRID_DOT)
        } else {
            CellStyle::new(PALETTE[color as usize], bg).cell(BLOCK)
        };
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, cell);
    }
}
