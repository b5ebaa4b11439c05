//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition over lines and the two
//! board scoring strategies used as search leaf values.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{Evaluator, Heuristic, PatternWeights, SimpleEvaluator, WeightedEvaluator};
pub use patterns::{encode, first_match, matches, Pattern};
