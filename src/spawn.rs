//! Random tile source: a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.

use rand::Rng;

use crate::engine::{Board, Tile, Value};

/// Pick a random empty cell of `board` and a value for it, using the provided RNG.
/// Returns `None` when the board is full.
///
/// Deterministic example using a seeded RNG:
/// ```
/// use game_2048::engine::Model;
/// use game_2048::spawn;
/// use rand::{SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(123);
/// let mut m = Model::new(4);
/// let t = spawn::random_tile(m.board(), &mut rng).unwrap();
/// m.add_tile(t);
/// assert_eq!(m.board().empty_cells().count(), 15);
/// ```
pub fn random_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Tile> {
    let empty = board.empty_cells().count();
    if empty == 0 {
        return None;
    }
    let index = rng.gen_range(0..empty);
    let (col, row) = board.empty_cells().nth(index)?;
    Some(Tile::new(random_value(rng), col, row))
}

/// Convenience: like `random_tile` but uses thread-local RNG.
pub fn random_tile_thread(board: &Board) -> Option<Tile> {
    let mut rng = rand::thread_rng();
    random_tile(board, &mut rng)
}

fn random_value<R: Rng + ?Sized>(rng: &mut R) -> Value {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}
