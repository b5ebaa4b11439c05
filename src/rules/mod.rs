//! Game rules for free-style Gomoku
//!
//! Five or more stones of one color in a row, column or diagonal wins.
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five, has_five, has_five_at};
