//! Grid module - flat storage for the board cells
//!
//! Cells are kept in a single row-major `Vec` (`row * width + col`) for cache
//! locality during scans. Each cell is either a tile or empty; empty cells only
//! exist between a clear and the following refill.

use crate::generator::TileGenerator;
use crate::types::Position;
use crate::BoardError;

/// A cell on the grid: `None` is empty, `Some(tile)` is filled.
pub type Cell<T> = Option<T>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    /// Allocate a `width` x `height` grid and fill it in row-major order.
    pub fn generate<G>(width: usize, height: usize, generator: &mut G) -> Result<Self, BoardError>
    where
        G: TileGenerator<T> + ?Sized,
    {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        let cells = (0..width * height)
            .map(|_| Some(generator.next_tile()))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from explicit rows. Every row must have the width of the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(BoardError::EmptyRows)?;
        if width == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            cells.extend(tiles.into_iter().map(Some));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for a position, `None` when out of bounds.
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some(pos.row * self.width + pos.col)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Tile at `pos`. `None` for empty cells and out-of-range positions alike.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Exchange two cells. Returns false (and does nothing) if either is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Empty a cell, returning what was there.
    pub fn clear(&mut self, pos: Position) -> Option<T> {
        self.index(pos).and_then(|idx| self.cells[idx].take())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Slide surviving tiles to the bottom of each column, keeping their order.
    ///
    /// Two-pointer pass per column, bottom to top. Returns how many empty cells
    /// ended up at the top of the grid in total.
    pub fn collapse(&mut self) -> usize {
        let width = self.width;
        let mut empties = 0;

        for col in 0..width {
            let mut write_row = self.height;
            for read_row in (0..self.height).rev() {
                let read = read_row * width + col;
                if self.cells[read].is_none() {
                    continue;
                }
                write_row -= 1;
                if write_row != read_row {
                    self.cells[write_row * width + col] = self.cells[read].take();
                }
            }
            empties += write_row;
        }

        empties
    }

    /// Fill every empty cell from the generator, column by column, top to bottom.
    ///
    /// Returns the number of tiles generated.
    pub fn refill<G>(&mut self, generator: &mut G) -> usize
    where
        G: TileGenerator<T> + ?Sized,
    {
        let mut filled = 0;
        for col in 0..self.width {
            for row in 0..self.height {
                let cell = &mut self.cells[row * self.width + col];
                if cell.is_none() {
                    *cell = Some(generator.next_tile());
                    filled += 1;
                }
            }
        }
        filled
    }

    /// Row-major view of one row.
    pub fn row(&self, row: usize) -> Option<&[Cell<T>]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn column(grid: &Grid<char>, col: usize) -> Vec<Option<char>> {
        (0..grid.height())
            .map(|row| grid.get(Position::new(row, col)).copied())
            .collect()
    }

    #[test]
    fn test_index_bounds() {
        let g = grid(&["abc", "def"]);
        assert_eq!(g.index(Position::new(0, 0)), Some(0));
        assert_eq!(g.index(Position::new(1, 2)), Some(5));
        assert_eq!(g.index(Position::new(2, 0)), None);
        assert_eq!(g.index(Position::new(0, 3)), None);
    }

    #[test]
    fn test_generate_row_major() {
        let mut next = 0u32;
        let g: Grid<u32> = Grid::generate(3, 2, &mut || {
            next += 1;
            next
        })
        .unwrap();
        assert_eq!(g.row(0), Some(&[Some(1), Some(2), Some(3)][..]));
        assert_eq!(g.row(1), Some(&[Some(4), Some(5), Some(6)][..]));
    }

    #[test]
    fn test_generate_rejects_zero_dimension() {
        let err = Grid::<char>::generate(0, 3, &mut || 'x').unwrap_err();
        assert_eq!(
            err,
            BoardError::ZeroDimension {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec!['a', 'b'], vec!['c']]).unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            Grid::<char>::from_rows(Vec::new()).unwrap_err(),
            BoardError::EmptyRows
        );
    }

    #[test]
    fn test_swap_out_of_bounds_is_noop() {
        let mut g = grid(&["ab", "cd"]);
        assert!(!g.swap(Position::new(0, 0), Position::new(0, 2)));
        assert_eq!(g, grid(&["ab", "cd"]));

        assert!(g.swap(Position::new(0, 0), Position::new(1, 1)));
        assert_eq!(g, grid(&["db", "ca"]));
    }

    #[test]
    fn test_collapse_keeps_order_and_moves_gaps_up() {
        let mut g = grid(&["ab", "cd", "ef", "gh"]);
        g.clear(Position::new(1, 0));
        g.clear(Position::new(3, 0));
        g.clear(Position::new(0, 1));

        let empties = g.collapse();
        assert_eq!(empties, 3);
        assert_eq!(column(&g, 0), vec![None, None, Some('a'), Some('e')]);
        assert_eq!(column(&g, 1), vec![None, Some('d'), Some('f'), Some('h')]);
    }

    #[test]
    fn test_collapse_without_gaps_is_noop() {
        let mut g = grid(&["ab", "cd"]);
        assert_eq!(g.collapse(), 0);
        assert_eq!(g, grid(&["ab", "cd"]));
    }

    #[test]
    fn test_refill_column_major_top_down() {
        let mut g = grid(&["ab", "cd", "ef"]);
        g.clear(Position::new(0, 0));
        g.clear(Position::new(1, 0));
        g.clear(Position::new(0, 1));

        let mut fresh = "123".chars();
        let filled = g.refill(&mut || fresh.next().unwrap_or('?'));
        assert_eq!(filled, 3);
        assert!(g.is_full());
        assert_eq!(column(&g, 0), vec![Some('1'), Some('2'), Some('e')]);
        assert_eq!(column(&g, 1), vec![Some('3'), Some('d'), Some('f')]);
    }
}
