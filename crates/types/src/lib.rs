//! Core types module - shared data structures and constants
//!
//! This module defines the value types passed between the board engine, the
//! terminal front end and any listener. Everything here is plain data with no
//! external dependencies, so it can be used from the core rules, the renderer
//! or a test harness alike.
//!
//! # Coordinates
//!
//! Positions are `(row, col)`, zero-based, with row 0 at the top and rows
//! increasing downward. Horizontal runs read left to right, vertical runs
//! read top to bottom.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_RUN_LEN` | 3 | Shortest sequence of equal tiles that clears |
//! | `DEFAULT_WIDTH` | 8 | Default board columns for the game |
//! | `DEFAULT_HEIGHT` | 8 | Default board rows for the game |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Axis, Gem, Match, Position};
//!
//! let run = Match::new(
//!     Gem::Ruby,
//!     Axis::Horizontal,
//!     vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
//! );
//! assert_eq!(run.len(), 3);
//! assert!(run.contains(Position::new(0, 1)));
//! assert_eq!(Gem::Ruby.as_char(), 'R');
//! ```

/// Shortest run of equal tiles that counts as a match.
pub const MIN_RUN_LEN: usize = 3;

/// Default board width used by the game front end.
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height used by the game front end.
pub const DEFAULT_HEIGHT: usize = 8;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when both positions share a row or a column, but not both.
    pub fn is_aligned_with(&self, other: Position) -> bool {
        (self.row == other.row) != (self.col == other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Direction a run extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// A run of at least [`MIN_RUN_LEN`] equal tiles along one row or column.
///
/// Positions are ordered left to right for horizontal runs and top to bottom
/// for vertical runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<T> {
    pub matched: T,
    pub axis: Axis,
    pub positions: Vec<Position>,
}

impl<T> Match<T> {
    pub fn new(matched: T, axis: Axis, positions: Vec<Position>) -> Self {
        Self {
            matched,
            axis,
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Notification sent to the board listener while a cascade resolves.
///
/// - **Match**: a run was found and is about to be cleared
/// - **Refill**: the cleared cells will be refilled before the next scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent<T> {
    Match(Match<T>),
    Refill,
}

impl<T> BoardEvent<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::Match(_) => "match",
            BoardEvent::Refill => "refill",
        }
    }

    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            BoardEvent::Match(run) => Some(run),
            BoardEvent::Refill => None,
        }
    }
}

/// How a scan reports runs longer than [`MIN_RUN_LEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunReporting {
    /// One run per maximal contiguous group.
    #[default]
    Maximal,
    /// Every extension is reported again as the scan walks past the minimum:
    /// a run of 5 yields runs of length 3, 4 and 5.
    Extending,
}

/// Summary of one cascade, from the first scan to quiescence (or the limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Passes that found and cleared at least one run.
    pub passes: u32,
    /// Runs cleared across all passes.
    pub runs: u32,
    /// False when the pass limit stopped the cascade with runs still present.
    pub stable: bool,
}

/// Result of a move request.
///
/// Illegal moves never mutate the board; the variant only says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A position is out of bounds, or the pair does not share exactly one axis.
    NotAligned,
    /// The swap would not create any run.
    NoMatch,
    /// The swap was applied and the cascade ran.
    Resolved(CascadeReport),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Resolved(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::NotAligned => "not aligned",
            MoveOutcome::NoMatch => "no match",
            MoveOutcome::Resolved(report) if report.stable => "resolved",
            MoveOutcome::Resolved(_) => "cascade limit",
        }
    }
}

/// The gem kinds used by the terminal game.
///
/// Each gem has a distinct letter and color in the renderer:
/// - **Ruby**: red
/// - **Sapphire**: blue
/// - **Emerald**: green
/// - **Topaz**: yellow
/// - **Amethyst**: purple
/// - **Pearl**: white
/// - **Onyx**: grey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gem {
    Ruby,
    Sapphire,
    Emerald,
    Topaz,
    Amethyst,
    Pearl,
    Onyx,
}

impl Gem {
    pub const ALL: [Gem; 7] = [
        Gem::Ruby,
        Gem::Sapphire,
        Gem::Emerald,
        Gem::Topaz,
        Gem::Amethyst,
        Gem::Pearl,
        Gem::Onyx,
    ];

    /// Letter used by the board view and the text dump.
    pub fn as_char(&self) -> char {
        match self {
            Gem::Ruby => 'R',
            Gem::Sapphire => 'S',
            Gem::Emerald => 'E',
            Gem::Topaz => 'T',
            Gem::Amethyst => 'A',
            Gem::Pearl => 'P',
            Gem::Onyx => 'O',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gem::Ruby => "ruby",
            Gem::Sapphire => "sapphire",
            Gem::Emerald => "emerald",
            Gem::Topaz => "topaz",
            Gem::Amethyst => "amethyst",
            Gem::Pearl => "pearl",
            Gem::Onyx => "onyx",
        }
    }
}

/// Cursor actions produced by the key map and consumed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    Up,
    Down,
    Left,
    Right,
    /// Mark the cell under the cursor, or swap with the marked cell
    Select,
    /// Drop the current selection
    Cancel,
    /// Deal a fresh board
    NewBoard,
}

impl CursorAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorAction::Up => "up",
            CursorAction::Down => "down",
            CursorAction::Left => "left",
            CursorAction::Right => "right",
            CursorAction::Select => "select",
            CursorAction::Cancel => "cancel",
            CursorAction::NewBoard => "new board",
        }
    }
}
