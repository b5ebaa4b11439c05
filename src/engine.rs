//! Main AI engine: difficulty-driven alpha-beta move selection
//!
//! The engine is the entry point for hosts. It resolves the search depth
//! from a [`Difficulty`], runs the alpha-beta search with the configured
//! [`Heuristic`] and reports the chosen move with search statistics.
//!
//! # Example
//!
//! ```
//! use gomoku::{best_move, Board, Cell, Difficulty, Pos};
//!
//! let board = Board::with_board_size(5)
//!     .unwrap()
//!     .with_move(Pos::new(2, 2), Cell::Min)
//!     .unwrap();
//!
//! let reply = best_move(&board, Difficulty::Easy);
//! assert!(reply.is_some());
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::config::Difficulty;
use crate::eval::Heuristic;
use crate::search::Searcher;

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the position
    pub score: i32,
    /// Depth searched, in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// AI engine for the automated (`Cell::Max`) player.
///
/// Holds no state between calls other than its settings, so a single engine
/// can be reused for a whole game or shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AIEngine {
    difficulty: Difficulty,
    heuristic: Heuristic,
}

impl AIEngine {
    #[must_use]
    pub fn new(difficulty: Difficulty, heuristic: Heuristic) -> Self {
        Self {
            difficulty,
            heuristic,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Get the best move for the automated player, or `None` if no move is
    /// available (board full or already won).
    #[must_use]
    pub fn get_move(&self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let depth = self.difficulty.depth();

        let mut searcher = Searcher::new(&self.heuristic);
        let result = searcher.search(board, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            difficulty = %self.difficulty,
            heuristic = %self.heuristic,
            depth,
            nodes = result.nodes,
            score = result.score,
            time_ms,
            "search finished, best move {:?}",
            result.best_move
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Pick a move for the automated player using the weighted heuristic.
#[must_use]
pub fn best_move(board: &Board, difficulty: Difficulty) -> Option<Pos> {
    AIEngine::new(difficulty, Heuristic::Weighted).get_move(board)
}
