//! Plain-text dump of a board, one line per row.

use match3_core::{Board, TileGenerator};

/// Render every row as space-separated glyphs; empty cells print as `.`.
pub fn render_text<T, G>(board: &Board<T, G>, mut glyph: impl FnMut(&T) -> char) -> String
where
    T: Clone + PartialEq,
    G: TileGenerator<T>,
{
    let mut out = String::with_capacity(board.width() * board.height() * 2);
    for row in 0..board.height() {
        let Some(cells) = board.row(row) else { break };
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(cell.as_ref().map(&mut glyph).unwrap_or('.'));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumps_rows_in_order() {
        let rows = vec![vec![1u8, 2, 3], vec![4, 5, 6]];
        let board = Board::from_rows(|| 0u8, rows).unwrap();
        let text = render_text(&board, |v| char::from(b'0' + v));
        assert_eq!(text, "1 2 3\n4 5 6\n");
    }
}
