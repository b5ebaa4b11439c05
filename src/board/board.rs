//! Square board value with bounds-checked access

use super::{Cell, Pos, MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{GomokuError, Result};

/// Game board: a `dimension` x `dimension` grid of intersections
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    /// Row-major cells
    cells: Vec<Cell>,
    /// Number of non-empty cells
    stones: usize,
}

impl Board {
    /// Create an empty board with `dimension` intersections per side.
    pub fn new(dimension: usize) -> Result<Self> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(GomokuError::InvalidConfiguration(format!(
                "board dimension {dimension} not in {MIN_DIMENSION}..={MAX_DIMENSION}"
            )));
        }
        Ok(Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
            stones: 0,
        })
    }

    /// Create an empty board for a host-configured board size (squares per side).
    pub fn with_board_size(board_size: usize) -> Result<Self> {
        Self::new(board_size + 1)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let d = self.dimension as i32;
        row >= 0 && row < d && col >= 0 && col < d
    }

    /// Get cell at position
    pub fn get(&self, pos: Pos) -> Result<Cell> {
        self.check_bounds(pos)?;
        Ok(self.at(pos))
    }

    /// Unchecked read for positions already known to be on the board
    #[inline]
    pub(crate) fn at(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index(self.dimension)]
    }

    /// Return a new board with `player`'s stone at `pos`.
    ///
    /// Fails with `OutOfRange` for coordinates off the board and with
    /// `IllegalMove` when the cell is occupied or `player` is `Empty`.
    pub fn with_move(&self, pos: Pos, player: Cell) -> Result<Board> {
        self.check_bounds(pos)?;
        if !player.is_stone() || self.at(pos).is_stone() {
            return Err(GomokuError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }
        let mut next = self.clone();
        next.place(pos, player);
        Ok(next)
    }

    /// Place a stone in place. Caller guarantees `pos` is on the board and empty.
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, player: Cell) {
        debug_assert!(self.at(pos) == Cell::Empty && player.is_stone());
        self.cells[pos.to_index(self.dimension)] = player;
        self.stones += 1;
    }

    /// Undo a `place`
    #[inline]
    pub(crate) fn remove(&mut self, pos: Pos) {
        debug_assert!(self.at(pos).is_stone());
        self.cells[pos.to_index(self.dimension)] = Cell::Empty;
        self.stones -= 1;
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let d = self.dimension;
        (0..d * d).map(move |idx| Pos::from_index(idx, d))
    }

    fn check_bounds(&self, pos: Pos) -> Result<()> {
        if (pos.row as usize) < self.dimension && (pos.col as usize) < self.dimension {
            Ok(())
        } else {
            Err(GomokuError::OutOfRange {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
                dimension: self.dimension,
            })
        }
    }
}
