//! Turn-loop driver: owns a [`Model`] and an RNG, applies player commands
//! and spawns a tile after every tilt that changed the board.

use std::str::FromStr;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::engine::{Model, ParseError, Side};
use crate::spawn;

/// Settings for a run of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length.
    pub size: usize,
    /// Tiles spawned at the start of each game.
    pub initial_tiles: usize,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: 4, initial_tiles: 2, seed: None }
    }
}

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tilt(Side),
    NewGame,
    Quit,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" | "restart" => Ok(Command::NewGame),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other
                .parse::<Side>()
                .map(Command::Tilt)
                .map_err(|_| ParseError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// What applying a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The tilt changed the board and a new tile was spawned.
    Moved,
    /// The tilt left the board as it was.
    Unchanged,
    /// The game is over; tilts are ignored until a new game starts.
    Ignored,
    /// A fresh game was started.
    Started,
    Quit,
}

pub struct Game<R> {
    model: Model,
    rng: R,
    config: GameConfig,
}

impl Game<StdRng> {
    /// Start a game with an RNG seeded from `config.seed`.
    pub fn from_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::new(config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Build a game and start the first round.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let model = Model::new(config.size);
        let mut game = Game { model, rng, config };
        game.start();
        game
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Clear the board and spawn the opening tiles.
    pub fn start(&mut self) {
        self.model.clear();
        for _ in 0..self.config.initial_tiles {
            if !self.spawn() {
                break;
            }
        }
        info!(
            "new {0}x{0} game (best so far {1})",
            self.model.size(),
            self.model.max_score()
        );
    }

    pub fn apply(&mut self, command: Command) -> Step {
        match command {
            Command::Quit => Step::Quit,
            Command::NewGame => {
                self.start();
                Step::Started
            }
            Command::Tilt(_) if self.model.game_over() => Step::Ignored,
            Command::Tilt(side) => {
                if self.model.tilt(side) {
                    self.spawn();
                    Step::Moved
                } else {
                    debug!("tilt {side} did not change the board");
                    Step::Unchanged
                }
            }
        }
    }

    fn spawn(&mut self) -> bool {
        match spawn::random_tile(self.model.board(), &mut self.rng) {
            Some(tile) => {
                self.model.add_tile(tile);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(size: usize) -> Game<StdRng> {
        Game::from_config(GameConfig { size, seed: Some(11), ..GameConfig::default() })
    }

    #[test]
    fn parse_commands() {
        assert_eq!("up".parse::<Command>().unwrap(), Command::Tilt(Side::North));
        assert_eq!(" D ".parse::<Command>().unwrap(), Command::Tilt(Side::East));
        assert_eq!("New".parse::<Command>().unwrap(), Command::NewGame);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseError::UnknownCommand("jump".to_string()))
        );
    }

    #[test]
    fn starts_with_initial_tiles() {
        let game = seeded(4);
        assert_eq!(game.model().board().tiles().count(), 2);
        assert_eq!(game.model().score(), 0);
        assert!(!game.model().game_over());
    }

    #[test]
    fn initial_tiles_capped_by_board() {
        let config = GameConfig { size: 1, initial_tiles: 3, seed: Some(1) };
        let game = Game::from_config(config);
        assert_eq!(game.model().board().tiles().count(), 1);
        assert!(game.model().game_over());
    }

    #[test]
    fn one_spawn_per_changing_tilt() {
        let mut game = seeded(4);
        for side in Side::ALL.iter().cycle().take(40).copied() {
            if game.model().game_over() {
                break;
            }
            let before = game.model().clone();
            let mut tilted = before.clone();
            let changed = tilted.tilt(side);

            match game.apply(Command::Tilt(side)) {
                Step::Moved => {
                    assert!(changed);
                    let board = game.model().board();
                    assert_eq!(board.tiles().count(), tilted.board().tiles().count() + 1);
                    for t in tilted.board().tiles() {
                        assert_eq!(board.tile(t.col(), t.row()), Some(t));
                    }
                    assert_eq!(game.model().score(), tilted.score());
                }
                Step::Unchanged => {
                    assert!(!changed);
                    assert_eq!(game.model(), &before);
                }
                other => panic!("unexpected step {other:?}"),
            }
        }
    }

    #[test]
    fn game_over_ignores_tilts_until_new_game() {
        let mut game = seeded(1);
        assert!(game.model().game_over());
        assert_eq!(game.apply(Command::Tilt(Side::North)), Step::Ignored);
        assert_eq!(game.apply(Command::NewGame), Step::Started);
        assert_eq!(game.model().board().tiles().count(), 1);
        assert_eq!(game.apply(Command::Quit), Step::Quit);
    }

    #[test]
    fn seeded_games_repeat() {
        let mut a = seeded(4);
        let mut b = seeded(4);
        for side in [Side::West, Side::South, Side::East, Side::North, Side::West] {
            assert_eq!(a.apply(Command::Tilt(side)), b.apply(Command::Tilt(side)));
        }
        assert_eq!(a.model(), b.model());
    }
}
