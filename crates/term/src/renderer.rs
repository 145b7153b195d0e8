//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame rewrites every cell. The screen is only cleared when the frame
//! size changes, which is enough for a board that redraws on key presses.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::QueueableCommand;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

pub struct TerminalRenderer {
    out: io::Stdout,
    scratch: Vec<u8>,
    /// Size of the last frame drawn; `None` forces a clear.
    last_size: Option<(u16, u16)>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            scratch: Vec::with_capacity(8 * 1024),
            last_size: None,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.last_size = None;
        self.scratch.clear();
        self.scratch.queue(EnterAlternateScreen)?.queue(Hide)?;
        self.flush_scratch()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(Show)?
            .queue(LeaveAlternateScreen)?;
        self.flush_scratch()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let size = (fb.width(), fb.height());
        let resized = self.last_size != Some(size);
        self.last_size = Some(size);

        self.scratch.clear();
        if resized {
            self.scratch.queue(Clear(ClearType::All))?;
        }
        encode_frame_into(fb, &mut self.scratch)?;
        self.flush_scratch()
    }

    fn flush_scratch(&mut self) -> Result<()> {
        let mut lock = self.out.lock();
        lock.write_all(&self.scratch)?;
        lock.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode every cell of `fb` into `out`, row by row, without touching stdout.
///
/// Style commands are only emitted when the style changes between cells.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(style.fg.into()))?
        .queue(SetBackgroundColor(style.bg.into()))?;
    for (on, attr) in [(style.bold, Attribute::Bold), (style.reverse, Attribute::Reverse)] {
        if on {
            out.queue(SetAttribute(attr))?;
        }
    }
    Ok(())
}
