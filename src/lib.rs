//! game-2048: the rules engine of the sliding-tile game 2048
//!
//! This crate provides:
//! - A `Model` holding the board, score, best score and game-over state, with
//!   the `tilt` move that slides and merges tiles (`engine` module)
//! - A random tile source for empty cells (`spawn` module)
//! - A small turn-loop driver that applies commands and spawns tiles (`game` module)
//!
//! Quick start:
//! ```
//! use game_2048::engine::{Model, Side};
//! use game_2048::spawn;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic start with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut model = Model::new(4);
//! for _ in 0..2 {
//!     let tile = spawn::random_tile(model.board(), &mut rng).unwrap();
//!     model.add_tile(tile);
//! }
//!
//! // Spawn again only when the tilt changed the board
//! if model.tilt(Side::West) {
//!     let tile = spawn::random_tile(model.board(), &mut rng).unwrap();
//!     model.add_tile(tile);
//! }
//! assert!(!model.game_over());
//! ```
//!
//! Driver loop
//! ```
//! use game_2048::engine::Side;
//! use game_2048::game::{Command, Game, GameConfig, Step};
//!
//! let mut game = Game::from_config(GameConfig { seed: Some(7), ..GameConfig::default() });
//! let mut moves = 0u32;
//! for side in Side::ALL.iter().cycle().take(16) {
//!     match game.apply(Command::Tilt(*side)) {
//!         Step::Moved => moves += 1,
//!         Step::Ignored => break,
//!         _ => {}
//!     }
//! }
//! println!("{}", game.model());
//! assert!(moves > 0);
//! ```
//!
pub mod engine;
pub mod game;
pub mod spawn;
