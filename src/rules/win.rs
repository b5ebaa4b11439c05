//! Win condition checking: five or more equal stones in a row

use crate::board::{line_positions, Board, Cell, Pos};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if any line of the board holds five consecutive equal stones.
///
/// Full board scan over every row, column and diagonal.
pub fn has_five(board: &Board) -> bool {
    find_five(board).is_some()
}

/// Find the first five-in-a-row in line order and return its cells.
pub fn find_five(board: &Board) -> Option<[Pos; 5]> {
    for line in line_positions(board.dimension()) {
        let mut run = 0usize;
        let mut prev = Cell::Empty;

        for (i, &pos) in line.iter().enumerate() {
            let cell = board.at(pos);
            if cell.is_stone() && cell == prev {
                run += 1;
            } else {
                run = usize::from(cell.is_stone());
            }
            prev = cell;

            if run == 5 {
                return Some([
                    line[i - 4],
                    line[i - 3],
                    line[i - 2],
                    line[i - 1],
                    line[i],
                ]);
            }
        }
    }
    None
}

/// Fast five-in-a-row check through a specific position.
///
/// Only walks the four lines through `pos`. If the board had no five before
/// the stone at `pos` was placed, this agrees with `has_five`.
pub fn has_five_at(board: &Board, pos: Pos) -> bool {
    let color = board.at(pos);
    if !color.is_stone() {
        return false;
    }

    for (dr, dc) in DIRECTIONS {
        let mut count = 1;
        for sign in [1, -1] {
            let mut r = i32::from(pos.row) + dr * sign;
            let mut c = i32::from(pos.col) + dc * sign;
            while board.contains(r, c) && board.at(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        if count >= 5 {
            return true;
        }
    }
    false
}
