//! BoardView: maps a gem board plus HUD state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use match3_core::{Board, TileGenerator};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Gem, MoveOutcome, Position};

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

/// Game state shown around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub cursor: Position,
    pub selected: Option<Position>,
    pub moves: u32,
    pub runs: u32,
    pub last: Option<MoveOutcome>,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            cursor: Position::new(0, 0),
            selected: None,
            moves: 0,
            runs: 0,
            last: None,
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

/// Title row above the board frame.
const TITLE: &str = "MATCH-3";

/// Widest cell accepted by [`BoardView::new`].
pub const MAX_CELL_W: u16 = 8;

/// Draws the board frame at (0, 1), with the side panel to its right.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // " R " keeps the grid readable with typical glyph aspect ratios.
        Self { cell_w: 3 }
    }
}

impl BoardView {
    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<G>(
        &self,
        board: &Board<Gem, G>,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) where
        G: TileGenerator<Gem>,
    {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let title = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(0, 0, TITLE, title);

        let frame_w = to_u16(board.width())
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = to_u16(board.height()).saturating_add(2);
        let (start_x, start_y) = (0u16, 1u16);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for pos in board.positions() {
            let x = (start_x + 1).saturating_add(to_u16(pos.col).saturating_mul(self.cell_w));
            let y = (start_y + 1).saturating_add(to_u16(pos.row));
            let is_cursor = pos == hud.cursor;
            let is_selected = hud.selected == Some(pos);
            match board.piece(pos) {
                Some(gem) => self.draw_gem(fb, x, y, *gem, is_cursor, is_selected),
                None => self.draw_empty(fb, x, y, is_cursor),
            }
        }

        self.draw_side_panel(fb, hud, viewport, frame_w.saturating_add(start_x + 2), start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<G>(&self, board: &Board<Gem, G>, hud: &Hud, viewport: Viewport) -> FrameBuffer
    where
        G: TileGenerator<Gem>,
    {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        // Nothing past the framebuffer edge is visible.
        for dx in 1..(w - 1).min(fb.width()) {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..(h - 1).min(fb.height()) {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn draw_gem(&self, fb: &mut FrameBuffer, x: u16, y: u16, gem: Gem, cursor: bool, selected: bool) {
        let mut style = CellStyle::fg(gem_color(gem));
        if selected {
            style = style.bold();
        }
        if cursor {
            style = style.reversed();
        }
        let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };
        self.fill_cell(fb, x, y, open, gem.as_char(), close, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, x: u16, y: u16, cursor: bool) {
        let mut style = CellStyle::fg(Rgb::new(90, 90, 100));
        if cursor {
            style = style.reversed();
        }
        self.fill_cell(fb, x, y, ' ', '·', ' ', style);
    }

    /// Glyph centered in the cell, with optional edge markers.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        open: char,
        glyph: char,
        close: char,
        style: CellStyle,
    ) {
        for dx in 0..self.cell_w {
            let ch = if dx == self.cell_w / 2 {
                glyph
            } else if dx == 0 {
                open
            } else if dx == self.cell_w - 1 {
                close
            } else {
                ' '
            };
            fb.put_char(x.saturating_add(dx), y, ch, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, hud: &Hud, viewport: Viewport, x: u16, y: u16) {
        if x >= viewport.width || viewport.width - x < 14 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = y;
        for (name, text) in [
            ("MOVES", hud.moves.to_string()),
            ("RUNS", hud.runs.to_string()),
            ("LAST", hud.last.map(|o| o.as_str()).unwrap_or("-").to_string()),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y.saturating_add(1), &text, value);
            y = y.saturating_add(3);
        }

        let help = CellStyle::fg(Rgb::new(120, 120, 130));
        for line in ["arrows move", "space select", "esc cancel", "n new  q quit"] {
            fb.put_str(x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

/// Board coordinates past `u16::MAX` land off-screen.
fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn gem_color(gem: Gem) -> Rgb {
    match gem {
        Gem::Ruby => Rgb::new(220, 60, 60),
        Gem::Sapphire => Rgb::new(80, 120, 230),
        Gem::Emerald => Rgb::new(80, 210, 110),
        Gem::Topaz => Rgb::new(240, 210, 70),
        Gem::Amethyst => Rgb::new(180, 100, 220),
        Gem::Pearl => Rgb::new(240, 240, 240),
        Gem::Onyx => Rgb::new(130, 130, 140),
    }
}
