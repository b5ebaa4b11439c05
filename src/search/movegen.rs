//! Candidate move generation
//!
//! Only empty cells touching an existing stone (8-neighbourhood) are
//! searched. Candidates come back in ascending (row, col) order so that
//! ties in the search always resolve the same way.

use crate::board::{Board, Pos};

/// Neighbour offsets: orthogonal and diagonal
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate candidate moves near existing stones.
///
/// An empty board yields the centre intersection alone; a full board yields
/// nothing.
#[must_use]
pub fn candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        let center = (board.dimension() / 2) as u8;
        return vec![Pos::new(center, center)];
    }

    board
        .positions()
        .filter(|&pos| !board.at(pos).is_stone() && has_neighbour(board, pos))
        .collect()
}

fn has_neighbour(board: &Board, pos: Pos) -> bool {
    NEIGHBOURS.iter().any(|&(dr, dc)| {
        let r = i32::from(pos.row) + dr;
        let c = i32::from(pos.col) + dc;
        board.contains(r, c) && board.at(Pos::new(r as u8, c as u8)).is_stone()
    })
}
