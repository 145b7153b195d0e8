//! Board cursor and two-step selection.
//!
//! The first `Select` marks the cell under the cursor. A second `Select` on a
//! different cell produces a [`SwapRequest`] and clears the mark; selecting the
//! marked cell again unmarks it. Whether the swap is legal is the board's call.

use crate::types::{CursorAction, Position};

/// Two cells the player asked to exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    pub first: Position,
    pub second: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    selected: Option<Position>,
    width: usize,
    height: usize,
}

impl Cursor {
    /// Cursor at the top-left cell of a `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pos: Position::new(0, 0),
            selected: None,
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Apply one action. Movement stops at the board edges.
    ///
    /// Returns a swap request when a second, different cell is selected.
    /// `NewBoard` is left to the caller and only resets the selection here.
    pub fn apply(&mut self, action: CursorAction) -> Option<SwapRequest> {
        match action {
            CursorAction::Up => self.pos.row = self.pos.row.saturating_sub(1),
            CursorAction::Down => self.pos.row = (self.pos.row + 1).min(self.height - 1),
            CursorAction::Left => self.pos.col = self.pos.col.saturating_sub(1),
            CursorAction::Right => self.pos.col = (self.pos.col + 1).min(self.width - 1),
            CursorAction::Select => return self.select(),
            CursorAction::Cancel | CursorAction::NewBoard => self.selected = None,
        }
        None
    }

    fn select(&mut self) -> Option<SwapRequest> {
        match self.selected.take() {
            None => {
                self.selected = Some(self.pos);
                None
            }
            Some(marked) if marked == self.pos => None,
            Some(marked) => Some(SwapRequest {
                first: marked,
                second: self.pos,
            }),
        }
    }
}
