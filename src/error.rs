//! Error types shared by the board, configuration and engine APIs

use thiserror::Error;

/// Errors reported synchronously by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GomokuError {
    /// Coordinates outside `[0, dimension)`
    #[error("position ({row}, {col}) is outside a {dimension}x{dimension} board")]
    OutOfRange {
        row: i32,
        col: i32,
        dimension: usize,
    },

    /// Target cell is already occupied (or the stone to place is `Empty`)
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    /// Unknown difficulty, heuristic name, or board size out of bounds
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GomokuError>;
