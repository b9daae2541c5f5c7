//! Engine module: the board grid, the game-state model and its tilt/merge
//! rules.
//!
//! - `Side` names a direction and maps a rotated view onto the grid.
//! - `Board` is the square grid of optional tile values.
//! - `Model` owns score and game-over state and implements `tilt`.

mod board;
mod model;
mod side;

pub use board::{Board, Tile};
pub use model::{
    at_least_one_move_exists, empty_space_exists, max_tile_exists, Model, ModelError, MAX_PIECE,
};
pub use side::Side;

/// A tile value: a power of two, at least 2.
pub type Value = u32;
/// Accumulated score. Never decreases within a game.
pub type Score = u64;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown side: {0:?}")]
    UnknownSide(String),
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}
