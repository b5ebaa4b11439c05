//! Board representation for Gomoku

pub mod board;
pub mod lines;


// Re-exports
pub use board::Board;
pub use lines::{line_positions, lines_of, Line};

/// Smallest board size the host may configure (intersections per side minus one)
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board size the host may configure
pub const MAX_BOARD_SIZE: usize = 20;
/// Smallest valid board dimension (intersections per side)
pub const MIN_DIMENSION: usize = MIN_BOARD_SIZE + 1;
/// Largest valid board dimension
pub const MAX_DIMENSION: usize = MAX_BOARD_SIZE + 1;

/// Contents of one intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// The automated player's stone
    Max,
    /// The opponent's stone
    Min,
}

impl Cell {
    /// Get opponent stone
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Max => Cell::Min,
            Cell::Min => Cell::Max,
            Cell::Empty => Cell::Empty,
        }
    }

    #[inline]
    pub fn is_stone(self) -> bool {
        self != Cell::Empty
    }
}

/// Position on the board; ordered by row, then column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given dimension
    #[inline]
    pub fn to_index(self, dimension: usize) -> usize {
        self.row as usize * dimension + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, dimension: usize) -> Self {
        Self {
            row: (idx / dimension) as u8,
            col: (idx % dimension) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
