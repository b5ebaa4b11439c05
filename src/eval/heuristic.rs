//! Heuristic evaluation of board positions
//!
//! Scores are always from the automated player's (`Cell::Max`) point of view:
//! positive favours Max, negative favours Min. Two strategies are provided:
//!
//! - [`SimpleEvaluator`]: counts stones on lines held by only one side
//! - [`WeightedEvaluator`]: sums pattern weights, with defense weighted above
//!   offense so blocking a shape outranks building the same shape
//!
//! Both evaluate every line independently. A stone that takes part in threats
//! on two lines (a row and a column, say) is scored once per line; overlapping
//! threats through one stone are not combined.

use std::str::FromStr;

use crate::board::{lines_of, Board, Cell};
use crate::error::GomokuError;

use super::patterns::{first_match, Pattern};

/// A board scoring strategy usable as the search's leaf evaluation.
pub trait Evaluator {
    fn score(&self, board: &Board) -> i32;
}

/// Stone counting on uncontested lines.
///
/// A line holding only Max stones adds their count; a line holding only Min
/// stones subtracts twice theirs. Mixed and empty lines add nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEvaluator;

impl Evaluator for SimpleEvaluator {
    fn score(&self, board: &Board) -> i32 {
        let mut score = 0;
        for line in lines_of(board) {
            let max = line.iter().filter(|&&c| c == Cell::Max).count() as i32;
            let min = line.iter().filter(|&&c| c == Cell::Min).count() as i32;
            if max > 0 && min == 0 {
                score += max;
            } else if min > 0 && max == 0 {
                score -= 2 * min;
            }
        }
        score
    }
}

/// Weight per pattern, indexed in [`Pattern::PRIORITY`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternWeights(pub [i32; 7]);

impl PatternWeights {
    /// Weights for the automated player's own shapes
    pub const OFFENSE: PatternWeights =
        PatternWeights([100_000, 10_000, 1_000, 1_000, 100, 100, 10]);

    /// Weights for the opponent's shapes, subtracted from the score.
    /// Each is at least the matching offense weight.
    pub const DEFENSE: PatternWeights =
        PatternWeights([100_000, 15_000, 12_000, 8_000, 5_000, 2_000, 1_000]);

    #[inline]
    pub fn weight(&self, pattern: Pattern) -> i32 {
        self.0[pattern as usize]
    }
}

/// Pattern-based evaluation (default strategy).
///
/// For each line and each player the first pattern in priority order that
/// matches contributes its weight, and no weaker pattern is counted on that
/// line: an open four is never also scored as a four or a three.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEvaluator {
    pub offense: PatternWeights,
    pub defense: PatternWeights,
}

impl Default for WeightedEvaluator {
    fn default() -> Self {
        Self {
            offense: PatternWeights::OFFENSE,
            defense: PatternWeights::DEFENSE,
        }
    }
}

impl WeightedEvaluator {
    /// Contribution of a single line for `player` using `weights`.
    pub fn line_score(line: &[Cell], player: Cell, weights: &PatternWeights) -> i32 {
        first_match(line, player).map_or(0, |pattern| weights.weight(pattern))
    }
}

impl Evaluator for WeightedEvaluator {
    fn score(&self, board: &Board) -> i32 {
        lines_of(board)
            .iter()
            .map(|line| {
                Self::line_score(line, Cell::Max, &self.offense)
                    - Self::line_score(line, Cell::Min, &self.defense)
            })
            .sum()
    }
}

/// Runtime selection of an evaluation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    Simple,
    #[default]
    Weighted,
}

impl Evaluator for Heuristic {
    fn score(&self, board: &Board) -> i32 {
        match self {
            Heuristic::Simple => SimpleEvaluator.score(board),
            Heuristic::Weighted => WeightedEvaluator::default().score(board),
        }
    }
}

impl FromStr for Heuristic {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Heuristic::Simple),
            "weighted" => Ok(Heuristic::Weighted),
            other => Err(GomokuError::InvalidConfiguration(format!(
                "unknown heuristic '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Simple => write!(f, "simple"),
            Heuristic::Weighted => write!(f, "weighted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_with(dimension: usize, stones: &[(u8, u8, Cell)]) -> Board {
        stones.iter().fold(Board::new(dimension).unwrap(), |b, &(r, c, s)| {
            b.with_move(Pos::new(r, c), s).unwrap()
        })
    }

    #[test]
    fn test_defense_outweighs_offense() {
        for pattern in Pattern::PRIORITY {
            assert!(
                PatternWeights::DEFENSE.weight(pattern) >= PatternWeights::OFFENSE.weight(pattern),
                "{} defense weight below offense",
                pattern.name()
            );
        }
    }

    #[test]
    fn test_open_four_line_scores_open_four_only() {
        use crate::board::Cell::{Empty as E, Max as X};
        let line = [E, X, X, X, X, E];
        assert_eq!(
            WeightedEvaluator::line_score(&line, Cell::Max, &PatternWeights::OFFENSE),
            10_000
        );
        let opp = [E, Cell::Min, Cell::Min, Cell::Min, Cell::Min, E];
        assert_eq!(
            WeightedEvaluator::line_score(&opp, Cell::Min, &PatternWeights::DEFENSE),
            15_000
        );
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(6).unwrap();
        assert_eq!(WeightedEvaluator::default().score(&board), 0);
        assert_eq!(SimpleEvaluator.score(&board), 0);
    }

    #[test]
    fn test_simple_single_stone() {
        // A lone stone sits on one row, one column and two diagonals
        let board = board_with(6, &[(2, 2, Cell::Max)]);
        assert_eq!(SimpleEvaluator.score(&board), 4);

        let board = board_with(6, &[(2, 2, Cell::Min)]);
        assert_eq!(SimpleEvaluator.score(&board), -8);
    }

    #[test]
    fn test_simple_mixed_line_contributes_nothing() {
        // Same row: the row is mixed, each stone keeps its column and diagonals
        let board = board_with(6, &[(0, 0, Cell::Max), (0, 5, Cell::Min)]);
        // Max: column + 2 diagonals = 3; Min: column + 2 diagonals = 3 lines * -2
        assert_eq!(SimpleEvaluator.score(&board), 3 - 6);
    }

    #[test]
    fn test_weighted_two_in_row() {
        // Horizontal pair at the left edge: the row is a plain two (edge blocks it)
        let board = board_with(6, &[(3, 0, Cell::Max), (3, 1, Cell::Max)]);
        assert_eq!(WeightedEvaluator::default().score(&board), 10);

        let board = board_with(6, &[(3, 1, Cell::Max), (3, 2, Cell::Max)]);
        assert_eq!(WeightedEvaluator::default().score(&board), 100);
    }

    #[test]
    fn test_weighted_opponent_four_dominates() {
        let board = board_with(
            6,
            &[
                (0, 0, Cell::Min),
                (0, 1, Cell::Min),
                (0, 2, Cell::Min),
                (0, 3, Cell::Min),
            ],
        );
        assert_eq!(WeightedEvaluator::default().score(&board), -12_000);
    }

    #[test]
    fn test_heuristic_dispatch() {
        let board = board_with(6, &[(2, 2, Cell::Max)]);
        assert_eq!(Heuristic::Simple.score(&board), SimpleEvaluator.score(&board));
        assert_eq!(
            Heuristic::Weighted.score(&board),
            WeightedEvaluator::default().score(&board)
        );
        assert_eq!(Heuristic::default(), Heuristic::Weighted);
    }

    #[test]
    fn test_heuristic_from_str() {
        assert_eq!("Simple".parse::<Heuristic>(), Ok(Heuristic::Simple));
        assert_eq!("weighted".parse::<Heuristic>(), Ok(Heuristic::Weighted));
        assert!(matches!(
            "greedy".parse::<Heuristic>(),
            Err(GomokuError::InvalidConfiguration(_))
        ));
    }
}
