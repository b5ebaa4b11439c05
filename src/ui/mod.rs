//! GUI module for the Gomoku game
//!
//! This module provides the host application using egui/eframe. It owns
//! turn order, input and rendering, and calls into the engine for the
//! automated player's moves.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameResult, GameState, Outcome};
