//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: swap legality, run detection and the
//! clear/collapse/refill cascade. It has no dependencies on terminal I/O, so it
//! is:
//!
//! - **Generic**: tiles are any `Clone + PartialEq` type
//! - **Deterministic**: a seeded or scripted generator replays identical games
//! - **Synchronous**: a move resolves its whole cascade before returning
//!
//! # Module Structure
//!
//! - [`board`]: the board, moves, legality and the cascade loop
//! - [`generator`]: the tile generator trait and seeded/scripted generators
//! - [`listener`]: the listener trait plus recorder and channel helpers
//! - [`error`]: construction errors
//!
//! Run detection and cell storage are internal.
//!
//! # Example
//!
//! ```
//! use match3_core::{Board, EventRecorder, ScriptedTiles};
//! use match3_core::types::{MoveOutcome, Position};
//!
//! let rows = vec![
//!     vec!['a', 'a', 'b', 'a'],
//!     vec!['c', 'd', 'a', 'f'],
//!     vec!['g', 'h', 'i', 'j'],
//! ];
//! let generator = ScriptedTiles::cycle(vec!['1', '2', '3', '4']).unwrap();
//! let mut board = Board::from_rows(generator, rows).unwrap();
//!
//! let recorder = EventRecorder::new();
//! board.add_listener(recorder.clone());
//!
//! let outcome = board.move_tiles(Position::new(0, 2), Position::new(1, 2));
//! assert!(outcome.is_applied());
//! assert_eq!(recorder.len(), 2); // one match, one refill
//! assert!(board.find_matches().is_empty());
//!
//! // Moves that create nothing are rejected without touching the board.
//! let outcome = board.move_tiles(Position::new(2, 0), Position::new(2, 1));
//! assert_eq!(outcome, MoveOutcome::NoMatch);
//! ```
//!
//! # Termination
//!
//! The cascade loops until a scan finds no run. With a generator that keeps
//! producing runs it never ends; set [`Board::with_cascade_limit`] when the
//! generator is not trusted.

pub mod board;
pub mod error;
pub mod generator;
mod grid;
pub mod listener;
mod scan;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use generator::{RandomTiles, ScriptedTiles, SimpleRng, TileGenerator};
pub use grid::Cell;
pub use listener::{channel_listener, BoardListener, EventRecorder};
