//! Board module - the match-3 rules engine
//!
//! The board owns a `width` x `height` grid of tiles, the generator that fills
//! it and at most one listener. A move swaps two aligned cells if doing so
//! creates a run, then resolves the cascade:
//!
//! 1. scan for runs (rows, then columns)
//! 2. for each run: notify `Match`, notify `Refill`, clear its cells
//! 3. collapse every column so surviving tiles sit at the bottom
//! 4. refill the empty cells from the generator
//! 5. scan again, until no run is left
//!
//! Termination depends on the generator: one that keeps recreating runs keeps
//! the loop going. [`Board::with_cascade_limit`] caps the number of passes.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::generator::TileGenerator;
use crate::grid::{Cell, Grid};
use crate::listener::BoardListener;
use crate::scan;
use crate::types::{BoardEvent, CascadeReport, Match, MoveOutcome, Position, RunReporting};
use crate::BoardError;

/// A match-3 board over tiles of type `T`, filled by generator `G`.
pub struct Board<T, G> {
    grid: Grid<T>,
    generator: G,
    listener: Option<Box<dyn BoardListener<T>>>,
    reporting: RunReporting,
    cascade_limit: Option<u32>,
}

impl<T, G> Board<T, G>
where
    T: Clone + PartialEq,
    G: TileGenerator<T>,
{
    /// Create a board and fill every cell from `generator`, row by row.
    ///
    /// The initial fill is not checked for runs and emits no events.
    pub fn new(mut generator: G, width: usize, height: usize) -> Result<Self, BoardError> {
        let grid = Grid::generate(width, height, &mut generator)?;
        Ok(Self::with_grid(grid, generator))
    }

    /// Create a board from explicit rows. `generator` is only used for refills.
    pub fn from_rows(generator: G, rows: Vec<Vec<T>>) -> Result<Self, BoardError> {
        let grid = Grid::from_rows(rows)?;
        Ok(Self::with_grid(grid, generator))
    }

    fn with_grid(grid: Grid<T>, generator: G) -> Self {
        Self {
            grid,
            generator,
            listener: None,
            reporting: RunReporting::default(),
            cascade_limit: None,
        }
    }

    pub fn with_run_reporting(mut self, reporting: RunReporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Stop a cascade after `passes` clearing passes even if runs remain.
    pub fn with_cascade_limit(mut self, passes: u32) -> Self {
        self.cascade_limit = Some(passes);
        self
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn run_reporting(&self) -> RunReporting {
        self.reporting
    }

    pub fn cascade_limit(&self) -> Option<u32> {
        self.cascade_limit
    }

    /// Check if a position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    /// Tile at `pos`, or `None` if the position is off the board.
    pub fn piece(&self, pos: Position) -> Option<&T> {
        self.grid.get(pos)
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> Option<&[Cell<T>]> {
        self.grid.row(row)
    }

    /// Every position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Register the listener, replacing any previous one.
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: BoardListener<T> + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn remove_listener(&mut self) -> Option<Box<dyn BoardListener<T>>> {
        self.listener.take()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Both positions on the board, sharing exactly one of row or column.
    ///
    /// Distance is not checked: `(0, 0)` and `(0, 5)` are aligned.
    pub fn can_move(&self, first: Position, second: Position) -> bool {
        self.contains(first) && self.contains(second) && first.is_aligned_with(second)
    }

    /// True if swapping the two cells would leave a run somewhere on the board.
    ///
    /// The swap is undone before returning.
    pub fn is_legal_move(&mut self, first: Position, second: Position) -> bool {
        self.can_move(first, second) && self.probe_swap(first, second)
    }

    fn probe_swap(&mut self, first: Position, second: Position) -> bool {
        self.grid.swap(first, second);
        let found = scan::has_run(&self.grid);
        self.grid.swap(first, second);
        found
    }

    /// Swap two cells and resolve the cascade.
    ///
    /// Illegal moves leave the board untouched and notify nothing.
    pub fn move_tiles(&mut self, first: Position, second: Position) -> MoveOutcome {
        if !self.can_move(first, second) {
            debug!(?first, ?second, "move rejected: not aligned");
            return MoveOutcome::NotAligned;
        }
        if !self.probe_swap(first, second) {
            debug!(?first, ?second, "move rejected: no match");
            return MoveOutcome::NoMatch;
        }

        self.grid.swap(first, second);
        let report = self.resolve();
        debug!(
            ?first,
            ?second,
            passes = report.passes,
            runs = report.runs,
            stable = report.stable,
            "move resolved"
        );
        MoveOutcome::Resolved(report)
    }

    /// Resolve whatever runs are on the board right now, without a swap.
    pub fn settle(&mut self) -> CascadeReport {
        let report = self.resolve();
        debug!(passes = report.passes, runs = report.runs, "board settled");
        report
    }

    /// Every run currently on the board, in scan order.
    pub fn find_matches(&self) -> Vec<Match<T>> {
        scan::find_runs(&self.grid, self.reporting)
    }

    fn resolve(&mut self) -> CascadeReport {
        let mut report = CascadeReport::default();

        loop {
            let runs = scan::find_runs(&self.grid, self.reporting);
            if runs.is_empty() {
                report.stable = true;
                return report;
            }
            if let Some(limit) = self.cascade_limit {
                if report.passes >= limit {
                    warn!(
                        passes = report.passes,
                        pending = runs.len(),
                        "cascade limit reached with runs on the board"
                    );
                    return report;
                }
            }

            report.passes += 1;
            report.runs += runs.len() as u32;

            for run in &runs {
                trace!(axis = run.axis.as_str(), len = run.len(), "clearing run");
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_event(&BoardEvent::Match(run.clone()));
                    listener.on_event(&BoardEvent::Refill);
                }
                for &pos in &run.positions {
                    self.grid.clear(pos);
                }
            }

            self.grid.collapse();
            let filled = self.grid.refill(&mut self.generator);
            debug_assert!(self.grid.is_full());
            debug!(
                pass = report.passes,
                runs = runs.len(),
                filled,
                "cascade pass"
            );
        }
    }
}

impl<T: fmt::Debug, G> fmt::Debug for Board<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("listener", &self.listener.is_some())
            .field("reporting", &self.reporting)
            .field("cascade_limit", &self.cascade_limit)
            .finish_non_exhaustive()
    }
}
