//! Line extraction: rows, columns and both diagonal directions
//!
//! Order is fixed so evaluation and tests are reproducible:
//! 1. rows, top to bottom
//! 2. columns, left to right
//! 3. for each diagonal index `p` in `0..=2d-2`, the descending diagonal
//!    (`row + col == p`) followed by the ascending one (`(d-1-row) + col == p`)

use super::{Board, Cell, Pos};

/// Cells of one row, column or diagonal, in walk order
pub type Line = Vec<Cell>;

/// Coordinates of every line on a board of the given dimension.
pub fn line_positions(dimension: usize) -> Vec<Vec<Pos>> {
    let d = dimension;
    let mut lines = Vec::with_capacity(2 * d + 2 * (2 * d - 1));

    for row in 0..d {
        lines.push((0..d).map(|col| Pos::new(row as u8, col as u8)).collect());
    }

    for col in 0..d {
        lines.push((0..d).map(|row| Pos::new(row as u8, col as u8)).collect());
    }

    for p in 0..(2 * d - 1) {
        let start = (p + 1).saturating_sub(d);
        let end = (p + 1).min(d);
        let mut descending = Vec::with_capacity(end - start);
        let mut ascending = Vec::with_capacity(end - start);
        for q in start..end {
            let col = (p - q) as u8;
            descending.push(Pos::new(q as u8, col));
            ascending.push(Pos::new((d - 1 - q) as u8, col));
        }
        lines.push(descending);
        lines.push(ascending);
    }

    lines
}

/// Every line of `board` as cell sequences.
pub fn lines_of(board: &Board) -> Vec<Line> {
    line_positions(board.dimension())
        .into_iter()
        .map(|line| line.into_iter().map(|pos| board.at(pos)).collect())
        .collect()
}
