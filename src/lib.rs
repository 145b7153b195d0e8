//! Match-3 (workspace facade crate).
//!
//! Re-exports the engine crates under `match3::{core,input,term,types}` and
//! adds the pieces the binary is built from: configuration, logging, the
//! event log and the game session.

pub use match3_core as core;
pub use match3_input as input;
pub use match3_term as term;
pub use match3_types as types;

pub mod config;
pub mod event_log;
pub mod game;
pub mod logging;
