//! Game state management for the Gomoku GUI
//!
//! The human plays `Cell::Min` and always moves first; the engine plays
//! `Cell::Max`. Engine searches run on a worker thread so the window keeps
//! repainting while the AI thinks.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::rules::find_five;
use crate::{AIEngine, Board, Cell, GameConfig, MoveResult, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWins,
    AiWins,
    Draw,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub winning_line: Option<[Pos; 5]>,
}

/// Main game state
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub current_turn: Cell,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Cell)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,
}

impl GameState {
    /// Start a new game; fails if the configuration is out of bounds.
    pub fn new(config: GameConfig) -> crate::Result<Self> {
        config.validate()?;
        let board = Board::with_board_size(config.board_size)?;
        info!(
            board_size = config.board_size,
            difficulty = %config.difficulty,
            heuristic = %config.heuristic,
            "new game"
        );

        Ok(Self {
            config,
            board,
            current_turn: Cell::Min,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
        })
    }

    /// Restart with the same settings
    pub fn reset(&mut self) {
        if let Ok(fresh) = Self::new(self.config) {
            *self = fresh;
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Cell::Min
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Cell::Max
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| {
            warn!(%pos, "rejected move: {e}");
            e.to_string()
        })
    }

    /// Apply a move for the side to play, then check for a win or draw
    fn execute_move(&mut self, pos: Pos) -> crate::Result<()> {
        let player = self.current_turn;
        self.board = self.board.with_move(pos, player)?;

        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        self.message = None;
        debug!(%pos, ?player, "stone placed");

        if let Some(line) = find_five(&self.board) {
            let outcome = if player == Cell::Min {
                Outcome::HumanWins
            } else {
                Outcome::AiWins
            };
            self.finish(outcome, Some(line));
        } else if self.board.is_full() {
            self.finish(Outcome::Draw, None);
        } else {
            self.current_turn = player.opponent();
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, winning_line: Option<[Pos; 5]>) {
        info!(?outcome, moves = self.move_history.len(), "game over");
        self.game_over = Some(GameResult {
            outcome,
            winning_line,
        });
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let engine = AIEngine::new(self.config.difficulty, self.config.heuristic);
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move if the worker has finished
    pub fn check_ai_result(&mut self) {
        let polled = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => (receiver.try_recv(), start_time.elapsed()),
            AiState::Idle => return,
        };

        let result = match polled {
            (Ok(result), elapsed) => Some((result, elapsed)),
            (Err(TryRecvError::Empty), _) => None,
            (Err(TryRecvError::Disconnected), _) => {
                warn!("AI worker exited without a result");
                self.ai_state = AiState::Idle;
                self.message = Some("AI error".to_string());
                return;
            }
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_thinking_time = Some(elapsed);
            self.last_ai_result = Some(move_result.clone());

            match move_result.best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos) {
                        warn!(%pos, "engine proposed an illegal move: {e}");
                        self.message = Some(e.to_string());
                    }
                }
                None if self.board.is_full() => self.finish(Outcome::Draw, None),
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last human move and the AI reply to it
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let mut moves = std::mem::take(&mut self.move_history);
        // Pop back to the most recent human move
        while let Some((_, player)) = moves.pop() {
            if player == Cell::Min {
                break;
            }
        }

        let Ok(mut replay) = Self::new(self.config) else {
            return;
        };
        for (pos, _) in moves {
            if replay.execute_move(pos).is_err() {
                break;
            }
        }
        replay.last_ai_result = self.last_ai_result.take();
        *self = replay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, GomokuError, Heuristic};

    fn config(board_size: usize) -> GameConfig {
        GameConfig {
            board_size,
            difficulty: Difficulty::Easy,
            heuristic: Heuristic::Weighted,
        }
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_new_game_rejects_bad_size() {
        assert!(matches!(
            GameState::new(config(4)),
            Err(GomokuError::InvalidConfiguration(_))
        ));
        assert!(GameState::new(config(5)).is_ok());
    }

    #[test]
    fn test_human_moves_first_then_ai_replies() {
        let mut state = GameState::new(config(8)).unwrap();
        assert!(state.is_human_turn());

        state.try_place_stone(Pos::new(4, 4)).unwrap();
        assert!(state.is_ai_turn());
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());

        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert!(state.is_human_turn());
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.move_history[1].1, Cell::Max);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = GameState::new(config(8)).unwrap();
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert!(state.try_place_stone(Pos::new(4, 4)).is_err());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_human_five_ends_game() {
        let mut state = GameState::new(config(10)).unwrap();
        // Stack Max stones away from row 0 so the human can finish a row
        for col in 0..4 {
            state.board = state.board.with_move(Pos::new(9, col), Cell::Max).unwrap();
            state.board = state.board.with_move(Pos::new(0, col), Cell::Min).unwrap();
        }

        state.try_place_stone(Pos::new(0, 4)).unwrap();
        let result = state.game_over.unwrap();
        assert_eq!(result.outcome, Outcome::HumanWins);
        assert_eq!(result.winning_line.unwrap()[0], Pos::new(0, 0));
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_undo_removes_human_and_ai_moves() {
        let mut state = GameState::new(config(8)).unwrap();
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.board.stone_count(), 2);

        state.undo();
        assert_eq!(state.board.stone_count(), 0);
        assert!(state.move_history.is_empty());
        assert!(state.is_human_turn());
    }
}
