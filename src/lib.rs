//! Gomoku AI engine with minimax and alpha-beta pruning
//!
//! An automated player for free-style Gomoku (five in a row) on square
//! boards from 6x6 to 21x21 intersections:
//! - Five or more stones in a row, column or diagonal wins
//! - No captures, no forbidden moves
//! - The automated player is `Cell::Max`, its opponent `Cell::Min`
//!
//! # Architecture
//!
//! - [`board`]: Board value, cells, positions and line extraction
//! - [`rules`]: Five-in-a-row detection
//! - [`eval`]: Pattern matching and the two heuristic evaluators
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`config`]: Difficulty levels and game settings
//! - [`engine`]: Entry point tying the pieces together
//! - [`ui`]: egui front-end used by the `gomoku` binary
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{best_move, has_five, Board, Cell, Difficulty, Pos};
//!
//! // Board size 15 gives 16 intersections per side
//! let mut board = Board::with_board_size(15).unwrap();
//!
//! // Human (Min) plays, then the AI (Max) answers
//! board = board.with_move(Pos::new(8, 8), Cell::Min).unwrap();
//! if let Some(pos) = best_move(&board, Difficulty::Easy) {
//!     board = board.with_move(pos, Cell::Max).unwrap();
//! }
//!
//! assert!(!has_five(&board));
//! assert!(!board.is_full());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos};
pub use config::{depth_for, Difficulty, GameConfig};
pub use engine::{best_move, AIEngine, MoveResult};
pub use error::{GomokuError, Result};
pub use eval::Heuristic;
pub use rules::has_five;
