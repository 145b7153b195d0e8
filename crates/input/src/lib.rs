//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::CursorAction`] and tracks the board cursor and
//! selection that turn those actions into swap requests.

pub mod cursor;
pub mod map;

pub use match3_types as types;

pub use cursor::{Cursor, SwapRequest};
pub use map::{handle_key_event, should_quit};
