//! Game configuration: board size, difficulty and evaluation strategy
//!
//! Difficulty maps to a fixed search depth in plies:
//!
//! | Level  | Depth |
//! |--------|-------|
//! | Easy   | 2     |
//! | Medium | 3     |
//! | Hard   | 4     |

use std::str::FromStr;

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GomokuError, Result};
use crate::eval::Heuristic;

/// Named difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth in plies
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GomokuError::InvalidConfiguration(format!(
                "unknown difficulty '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a difficulty name to a search depth.
pub fn depth_for(level: &str) -> Result<u8> {
    level.parse::<Difficulty>().map(Difficulty::depth)
}

/// Settings the host collects before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Squares per side; the board has `board_size + 1` intersections per side
    pub board_size: usize,
    pub difficulty: Difficulty,
    pub heuristic: Heuristic,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            difficulty: Difficulty::default(),
            heuristic: Heuristic::default(),
        }
    }
}

impl GameConfig {
    /// Check the board size bounds.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GomokuError::InvalidConfiguration(format!(
                "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        Ok(())
    }

    /// Intersections per side
    #[inline]
    pub fn dimension(&self) -> usize {
        self.board_size + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(depth_for("Easy"), Ok(2));
        assert_eq!(depth_for("Medium"), Ok(3));
        assert_eq!(depth_for("Hard"), Ok(4));
        assert_eq!(depth_for("hard"), Ok(4));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        for level in ["", "Expert", "3", "easyy"] {
            assert!(
                matches!(depth_for(level), Err(GomokuError::InvalidConfiguration(_))),
                "{level:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_difficulty_display_round_trips() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse::<Difficulty>(), Ok(level));
        }
    }

    #[test]
    fn test_config_bounds() {
        let mut config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimension(), 16);

        config.board_size = 5;
        assert!(config.validate().is_ok());
        config.board_size = 20;
        assert!(config.validate().is_ok());

        for bad in [0, 4, 21] {
            config.board_size = bad;
            assert!(matches!(
                config.validate(),
                Err(GomokuError::InvalidConfiguration(_))
            ));
        }
    }
}
