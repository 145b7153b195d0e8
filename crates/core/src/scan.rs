//! Run detection
//!
//! Rows are scanned left to right, top row first, then columns top to bottom,
//! left column first. Each line keeps a running tile and count; an empty cell
//! breaks the run. How runs longer than [`MIN_RUN_LEN`] are reported depends
//! on [`RunReporting`].

use crate::grid::Grid;
use crate::types::{Axis, Match, Position, RunReporting, MIN_RUN_LEN};

/// All runs on the grid in scan order: horizontal runs first, then vertical.
pub(crate) fn find_runs<T>(grid: &Grid<T>, reporting: RunReporting) -> Vec<Match<T>>
where
    T: Clone + PartialEq,
{
    let mut runs = Vec::new();
    for row in 0..grid.height() {
        scan_line(
            grid,
            (0..grid.width()).map(|col| Position::new(row, col)),
            Axis::Horizontal,
            reporting,
            &mut runs,
        );
    }
    for col in 0..grid.width() {
        scan_line(
            grid,
            (0..grid.height()).map(|row| Position::new(row, col)),
            Axis::Vertical,
            reporting,
            &mut runs,
        );
    }
    runs
}

/// True if any run exists. Stops at the first one.
pub(crate) fn has_run<T: PartialEq>(grid: &Grid<T>) -> bool {
    let rows = (0..grid.height()).any(|row| {
        line_has_run(grid, (0..grid.width()).map(|col| Position::new(row, col)))
    });
    rows || (0..grid.width()).any(|col| {
        line_has_run(grid, (0..grid.height()).map(|row| Position::new(row, col)))
    })
}

fn line_has_run<T: PartialEq>(grid: &Grid<T>, line: impl Iterator<Item = Position>) -> bool {
    let mut current: Option<&T> = None;
    let mut count = 0usize;
    for pos in line {
        match grid.get(pos) {
            Some(tile) if current == Some(tile) => count += 1,
            Some(tile) => {
                current = Some(tile);
                count = 1;
            }
            None => {
                current = None;
                count = 0;
            }
        }
        if count >= MIN_RUN_LEN {
            return true;
        }
    }
    false
}

fn scan_line<T>(
    grid: &Grid<T>,
    line: impl Iterator<Item = Position>,
    axis: Axis,
    reporting: RunReporting,
    out: &mut Vec<Match<T>>,
) where
    T: Clone + PartialEq,
{
    let mut current: Option<&T> = None;
    let mut positions: Vec<Position> = Vec::new();

    for pos in line {
        let tile = grid.get(pos);
        let extends = matches!((current, tile), (Some(a), Some(b)) if a == b);

        if !extends {
            if reporting == RunReporting::Maximal {
                flush_maximal(current, &positions, axis, out);
            }
            positions.clear();
            current = tile;
        }
        if current.is_some() {
            positions.push(pos);
        }

        if reporting == RunReporting::Extending && positions.len() >= MIN_RUN_LEN {
            if let Some(tile) = current {
                out.push(Match::new(tile.clone(), axis, positions.clone()));
            }
        }
    }

    if reporting == RunReporting::Maximal {
        flush_maximal(current, &positions, axis, out);
    }
}

fn flush_maximal<T: Clone>(
    current: Option<&T>,
    positions: &[Position],
    axis: Axis,
    out: &mut Vec<Match<T>>,
) {
    if positions.len() < MIN_RUN_LEN {
        return;
    }
    if let Some(tile) = current {
        out.push(Match::new(tile.clone(), axis, positions.to_vec()));
    }
}
