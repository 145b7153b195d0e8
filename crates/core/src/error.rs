//! Construction-time errors.
//!
//! Board operations themselves never fail: out-of-range lookups return `None`
//! and illegal moves report a [`MoveOutcome`](crate::types::MoveOutcome).

/// Errors raised while building a board or a tile generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("board rows must not be empty")]
    EmptyRows,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile palette must not be empty")]
    EmptyPalette,
}
