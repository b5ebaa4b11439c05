//! Depth-limited minimax with alpha-beta pruning
//!
//! The automated player (`Cell::Max`) maximizes the evaluator's score and the
//! opponent (`Cell::Min`) minimizes it. The search works on a single scratch
//! copy of the caller's board, placing a stone before each recursive call
//! and removing it afterwards.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Cell, Pos};
//! use gomoku::eval::WeightedEvaluator;
//! use gomoku::search::Searcher;
//!
//! let evaluator = WeightedEvaluator::default();
//! let mut searcher = Searcher::new(&evaluator);
//! let board = Board::new(6).unwrap().with_move(Pos::new(2, 2), Cell::Min).unwrap();
//!
//! let result = searcher.search(&board, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Cell, Pos};
use crate::eval::Evaluator;
use crate::rules::{has_five, has_five_at};

use super::movegen::candidates;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the root is terminal or has no candidates
    pub best_move: Option<Pos>,
    /// Minimax value of the root position
    pub score: i32,
    /// Depth searched, in plies
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Alpha-beta searcher bound to one evaluation strategy.
pub struct Searcher<'a, E: Evaluator + ?Sized> {
    evaluator: &'a E,
    nodes: u64,
}

impl<'a, E: Evaluator + ?Sized> Searcher<'a, E> {
    #[must_use]
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Search `depth` plies ahead with Max to move.
    ///
    /// Ties between equally scored moves keep the earliest move in candidate
    /// order.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let mut scratch = board.clone();
        let (score, best_move) = self.alpha_beta(&mut scratch, None, depth, -INF, INF, true);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Recursive minimax step.
    ///
    /// `last` is the stone placed to reach this node; the five check only
    /// walks its lines, since the parent was not terminal. At the root the
    /// whole board is scanned.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        last: Option<Pos>,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        let won = match last {
            Some(pos) => has_five_at(board, pos),
            None => has_five(board),
        };
        if depth == 0 || won {
            return (self.evaluator.score(board), None);
        }

        let moves = candidates(board);
        if moves.is_empty() {
            return (self.evaluator.score(board), None);
        }

        let player = if maximizing { Cell::Max } else { Cell::Min };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            board.place(mov, player);
            let (score, _) = self.alpha_beta(board, Some(mov), depth - 1, alpha, beta, !maximizing);
            board.remove(mov);

            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{Heuristic, SimpleEvaluator, WeightedEvaluator};
    use quickcheck::{QuickCheck, TestResult};

    fn board_with(dimension: usize, stones: &[(u8, u8, Cell)]) -> Board {
        stones.iter().fold(Board::new(dimension).unwrap(), |b, &(r, c, s)| {
            b.with_move(Pos::new(r, c), s).unwrap()
        })
    }

    /// Plain minimax without pruning, copying the board at every node.
    fn minimax(
        board: &Board,
        depth: u8,
        maximizing: bool,
        evaluator: &dyn Evaluator,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 || has_five(board) {
            return evaluator.score(board);
        }
        let moves = candidates(board);
        if moves.is_empty() {
            return evaluator.score(board);
        }
        let player = if maximizing { Cell::Max } else { Cell::Min };
        let scores = moves.into_iter().map(|mov| {
            let child = board.with_move(mov, player).unwrap();
            minimax(&child, depth - 1, !maximizing, evaluator, nodes)
        });
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    #[test]
    fn test_search_empty_board_plays_center() {
        let evaluator = WeightedEvaluator::default();
        let mut searcher = Searcher::new(&evaluator);
        let board = Board::new(16).unwrap();

        let result = searcher.search(&board, 2);
        assert_eq!(result.best_move, Some(Pos::new(8, 8)));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let evaluator = WeightedEvaluator::default();
        let mut searcher = Searcher::new(&evaluator);
        let stones: Vec<_> = (0..4).map(|i| (2, i, Cell::Max)).collect();
        let board = board_with(8, &stones);

        let result = searcher.search(&board, 1);
        assert_eq!(result.best_move, Some(Pos::new(2, 4)));
        assert!(result.score >= 100_000);
    }

    #[test]
    fn test_search_blocks_opponent_four() {
        let evaluator = WeightedEvaluator::default();
        let mut searcher = Searcher::new(&evaluator);
        // Vertical four capped at the top; only (6, 7) completes it
        let mut stones: Vec<_> = (2..6).map(|i| (i, 7, Cell::Min)).collect();
        stones.push((1, 7, Cell::Max));
        let board = board_with(10, &stones);

        let result = searcher.search(&board, 2);
        assert_eq!(result.best_move, Some(Pos::new(6, 7)));
    }

    #[test]
    fn test_terminal_root_returns_no_move() {
        let evaluator = WeightedEvaluator::default();
        let mut searcher = Searcher::new(&evaluator);
        let stones: Vec<_> = (0..5).map(|i| (0, i, Cell::Min)).collect();
        let board = board_with(6, &stones);

        let result = searcher.search(&board, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluator.score(&board));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let mut searcher = Searcher::new(&SimpleEvaluator);
        let board = board_with(6, &[(2, 2, Cell::Max)]);

        let result = searcher.search(&board, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let evaluator = WeightedEvaluator::default();
        let mut searcher = Searcher::new(&evaluator);
        let board = board_with(7, &[(3, 3, Cell::Min), (3, 4, Cell::Max)]);
        let before = board.clone();

        let _ = searcher.search(&board, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_matches_minimax_and_saves_nodes() {
        let evaluator = WeightedEvaluator::default();
        let mut searcher = Searcher::new(&evaluator);
        let board = board_with(
            8,
            &[(3, 3, Cell::Min), (3, 4, Cell::Max), (4, 4, Cell::Min)],
        );

        let result = searcher.search(&board, 3);
        let mut nodes = 0;
        let expected = minimax(&board, 3, true, &evaluator, &mut nodes);

        assert_eq!(result.score, expected);
        assert!(result.nodes < nodes);
    }

    #[test]
    fn test_alpha_beta_equals_minimax() {
        fn prop(stones: Vec<(u8, u8, bool)>, depth: u8, simple: bool) -> TestResult {
            let mut board = Board::new(6).unwrap();
            for (r, c, max) in stones.into_iter().take(7) {
                let pos = Pos::new(r % 6, c % 6);
                let cell = if max { Cell::Max } else { Cell::Min };
                if let Ok(next) = board.with_move(pos, cell) {
                    board = next;
                }
            }
            let depth = depth % 3 + 1;
            let heuristic = if simple {
                Heuristic::Simple
            } else {
                Heuristic::Weighted
            };

            let mut searcher = Searcher::new(&heuristic);
            let result = searcher.search(&board, depth);
            let mut nodes = 0;
            let expected = minimax(&board, depth, true, &heuristic, &mut nodes);

            TestResult::from_bool(result.score == expected && result.nodes <= nodes)
        }

        QuickCheck::new()
            .tests(25)
            .quickcheck(prop as fn(Vec<(u8, u8, bool)>, u8, bool) -> TestResult);
    }
}
