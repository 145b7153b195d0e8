//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. Views draw into a plain
//! framebuffer, which the renderer flushes through crossterm.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Make views testable without a terminal
//! - Provide a plain-text dump for logs and debugging

pub mod board_view;
pub mod fb;
pub mod renderer;
pub mod text;

pub use match3_core as core;
pub use match3_types as types;

pub use board_view::{BoardView, Hud, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use text::render_text;
