//! Search module for the Gomoku AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher, INF};
pub use movegen::candidates;
