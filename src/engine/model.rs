use std::fmt;

use log::{debug, info, trace};

use super::{Board, Score, Side, Tile, Value};

/// Largest piece value. A board holding one ends the game.
pub const MAX_PIECE: Value = 2048;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("board must have at least one row")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("invalid tile value {value} at ({col}, {row})")]
    InvalidValue { value: Value, col: usize, row: usize },
}

/// The state of one 2048 game, plus the best score across games.
///
/// Equality is structural over the grid, score, max score and game-over
/// flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model {
    board: Board,
    score: Score,
    max_score: Score,
    game_over: bool,
}

impl Model {
    /// A new game on an empty `size` x `size` board with score 0.
    ///
    /// ```
    /// use game_2048::engine::{Model, Side, Tile};
    /// let mut m = Model::new(4);
    /// m.add_tile(Tile::new(2, 0, 0));
    /// m.add_tile(Tile::new(2, 0, 3));
    /// assert!(m.tilt(Side::North));
    /// assert_eq!(m.tile(0, 3).map(|t| t.value()), Some(4));
    /// assert_eq!(m.score(), 4);
    /// ```
    pub fn new(size: usize) -> Self {
        Model { board: Board::new(size), score: 0, max_score: 0, game_over: false }
    }

    /// Build a model from raw values, listed top row first as displayed;
    /// 0 marks an empty cell. Game-over is computed from the grid.
    ///
    /// ```
    /// use game_2048::engine::Model;
    /// let m = Model::from_values(&[[0, 2], [4, 0]], 0, 0).unwrap();
    /// assert_eq!(m.tile(1, 1).map(|t| t.value()), Some(2));
    /// assert_eq!(m.tile(0, 0).map(|t| t.value()), Some(4));
    /// ```
    pub fn from_values<R: AsRef<[Value]>>(
        rows: &[R],
        score: Score,
        max_score: Score,
    ) -> Result<Self, ModelError> {
        let size = rows.len();
        if size == 0 {
            return Err(ModelError::Empty);
        }
        let mut board = Board::new(size);
        for (i, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(ModelError::NotSquare { row: i, len: values.len(), size });
            }
            let row = size - 1 - i;
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if value < 2 || !value.is_power_of_two() {
                    return Err(ModelError::InvalidValue { value, col, row });
                }
                board.add_tile(Tile::new(value, col, row));
            }
        }
        let mut model = Model { board, score, max_score, game_over: false };
        model.check_game_over();
        Ok(model)
    }

    /// Tile at `(col, row)`, with (0, 0) the lower-left corner.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Best final score seen so far. Updated when a game ends.
    pub fn max_score(&self) -> Score {
        self.max_score
    }

    /// True if a `MAX_PIECE` tile is on the board or no move remains.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Empty the board and reset the score, starting a new game.
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
    }

    /// Add `tile` to the board. Its cell must be empty.
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.check_game_over();
    }

    /// Slide every tile toward `side`, merging equal neighbours. Returns
    /// true iff any tile moved or changed value.
    ///
    /// Each tile takes part in at most one merge per tilt. When three equal
    /// tiles line up, the two nearest `side` merge and the third stops
    /// behind them.
    pub fn tilt(&mut self, side: Side) -> bool {
        let before = self.score;
        let mut changed = false;
        for col in 0..self.size() {
            let (moved, gained) = self.tilt_column(col, side);
            changed |= moved;
            self.score += gained;
        }
        self.check_game_over();
        debug!(
            "tilt {side}: changed={changed} score +{} -> {}",
            self.score - before,
            self.score
        );
        trace!("{}", self);
        changed
    }

    /// Tilt one logical column toward logical north. Returns whether
    /// anything moved and the score gained from merges.
    fn tilt_column(&mut self, col: usize, side: Side) -> (bool, Score) {
        let size = self.size();
        // Rows holding a merge result from this pass.
        let mut merged = vec![false; size];
        let mut changed = false;
        let mut gained = 0;

        for row in (0..size - 1).rev() {
            let Some(tile) = self.board.tile_viewed(col, row, side) else {
                continue;
            };
            let above = (row + 1..size).find(|&r| self.board.tile_viewed(col, r, side).is_some());
            let dest = match above {
                None => size - 1,
                Some(a) => {
                    let target = self.board.tile_viewed(col, a, side).map(|t| t.value());
                    if !merged[a] && target == Some(tile.value()) {
                        a
                    } else {
                        a - 1
                    }
                }
            };
            if dest == row {
                continue;
            }
            if self.board.move_tile(col, dest, side, tile) {
                merged[dest] = true;
                gained += Score::from(tile.value()) * 2;
            }
            changed = true;
        }
        (changed, gained)
    }

    fn check_game_over(&mut self) {
        let over = max_tile_exists(&self.board) || !at_least_one_move_exists(&self.board);
        if over {
            if !self.game_over {
                info!("game over: score {} (previous max {})", self.score, self.max_score);
            }
            self.max_score = self.max_score.max(self.score);
        }
        self.game_over = over;
    }
}

/// True if any cell of `board` is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    board.empty_cells().next().is_some()
}

/// True if any tile of `board` equals [`MAX_PIECE`].
pub fn max_tile_exists(board: &Board) -> bool {
    board.tiles().any(|t| t.value() == MAX_PIECE)
}

/// True if some tilt could change `board`: a cell is empty, or two
/// horizontally or vertically adjacent tiles are equal. Diagonals and
/// wrap-around do not count.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let size = board.size();
    let value = |col, row| board.tile(col, row).map(|t| t.value());
    for row in 0..size {
        for col in 0..size {
            let here = value(col, row);
            if col + 1 < size && value(col + 1, row) == here {
                return true;
            }
            if row + 1 < size && value(col, row + 1) == here {
                return true;
            }
        }
    }
    false
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..self.size()).rev() {
            for col in 0..self.size() {
                match self.tile(col, row) {
                    Some(t) => write!(f, "|{:4}", t.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(f, "] {} (max: {}) (game is {}) ", self.score, self.max_score, over)
    }
}
