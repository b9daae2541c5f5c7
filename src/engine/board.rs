use super::{Side, Value};

/// A tile value together with the physical cell it was read from or is
/// destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: Value,
    col: usize,
    row: usize,
}

impl Tile {
    /// Create a tile of `value` at physical `(col, row)`.
    ///
    /// Panics if `value` is not a power of two of at least 2.
    pub fn new(value: Value, col: usize, row: usize) -> Self {
        assert!(value >= 2 && value.is_power_of_two(), "invalid tile value {value}");
        Tile { value, col, row }
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Square grid of optional tile values.
///
/// Every read and move can be made relative to a [`Side`], which is treated
/// as north for the duration of that call only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    // Row-major, row 0 at the bottom.
    cells: Vec<Option<Value>>,
}

impl Board {
    /// An empty `size` x `size` board. Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Board { size, cells: vec![None; size * size] }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.size && row < self.size,
            "({col}, {row}) is outside a {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Tile at physical `(col, row)`, if any.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells[self.index(col, row)].map(|value| Tile { value, col, row })
    }

    /// Tile at logical `(col, row)` when the board is viewed with `side` as
    /// north. The returned tile carries its physical coordinates.
    pub fn tile_viewed(&self, col: usize, row: usize, side: Side) -> Option<Tile> {
        let (pc, pr) = side.to_physical(col, row, self.size);
        self.tile(pc, pr)
    }

    /// Place `tile` at its recorded position. Panics if that cell is occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        let idx = self.index(tile.col, tile.row);
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already occupied",
            tile.col,
            tile.row
        );
        self.cells[idx] = Some(tile.value);
    }

    /// Move `tile` to logical `(col, row)` under `side`, clearing its old
    /// cell. If the destination already holds a tile the two values are
    /// summed into one tile there and `true` is returned.
    ///
    /// `tile` must be the tile currently stored at its recorded position.
    pub fn move_tile(&mut self, col: usize, row: usize, side: Side, tile: Tile) -> bool {
        let (pc, pr) = side.to_physical(col, row, self.size);
        let from = self.index(tile.col, tile.row);
        let to = self.index(pc, pr);
        debug_assert_eq!(self.cells[from], Some(tile.value));
        if from == to {
            return false;
        }
        self.cells[from] = None;
        match self.cells[to] {
            Some(existing) => {
                let merged = existing.checked_add(tile.value).unwrap_or_else(|| {
                    panic!("merging {existing} and {} overflows a tile value", tile.value)
                });
                self.cells[to] = Some(merged);
                true
            }
            None => {
                self.cells[to] = Some(tile.value);
                false
            }
        }
    }

    /// Remove every tile.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Occupied cells in row-major order from the bottom-left.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|value| Tile { value, col: idx % size, row: idx / size })
        })
    }

    /// Physical coordinates of every empty cell.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| (idx % size, idx / size))
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_read_tiles() {
        let mut b = Board::new(4);
        assert_eq!(b.size(), 4);
        b.add_tile(Tile::new(2, 1, 3));
        assert_eq!(b.tile(1, 3).map(|t| t.value()), Some(2));
        assert_eq!(b.tile(3, 1), None);
        assert_eq!(b.tiles().count(), 1);
        assert_eq!(b.empty_cells().count(), 15);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn add_onto_occupied_cell_panics() {
        let mut b = Board::new(4);
        b.add_tile(Tile::new(2, 0, 0));
        b.add_tile(Tile::new(4, 0, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_read_panics() {
        let b = Board::new(3);
        let _ = b.tile(3, 0);
    }

    #[test]
    #[should_panic(expected = "invalid tile value")]
    fn tile_value_must_be_power_of_two() {
        let _ = Tile::new(6, 0, 0);
    }

    #[test]
    fn viewed_reads_follow_side() {
        let mut b = Board::new(4);
        // Top-right corner.
        b.add_tile(Tile::new(8, 3, 3));
        // Same physical cell, addressed from each side.
        assert_eq!(b.tile_viewed(3, 3, Side::North).map(|t| t.value()), Some(8));
        assert_eq!(b.tile_viewed(0, 3, Side::East).map(|t| t.value()), Some(8));
        assert_eq!(b.tile_viewed(0, 0, Side::South).map(|t| t.value()), Some(8));
        assert_eq!(b.tile_viewed(3, 0, Side::West).map(|t| t.value()), Some(8));
        let t = b.tile_viewed(0, 3, Side::East).unwrap();
        assert_eq!((t.col(), t.row()), (3, 3));
    }

    #[test]
    fn move_relocates_and_merges() {
        let mut b = Board::new(4);
        b.add_tile(Tile::new(2, 0, 0));
        b.add_tile(Tile::new(2, 0, 3));

        let t = b.tile(0, 0).unwrap();
        assert!(!b.move_tile(0, 2, Side::North, t));
        assert_eq!(b.tile(0, 0), None);
        assert_eq!(b.tile(0, 2).map(|t| t.value()), Some(2));

        let t = b.tile(0, 2).unwrap();
        assert!(b.move_tile(0, 3, Side::North, t));
        assert_eq!(b.tile(0, 2), None);
        assert_eq!(b.tile(0, 3).map(|t| t.value()), Some(4));
        assert_eq!(b.total(), 4);
    }

    #[test]
    fn move_under_rotated_view() {
        let mut b = Board::new(4);
        b.add_tile(Tile::new(4, 0, 1));
        let t = b.tile_viewed(2, 0, Side::East).unwrap();
        assert!(!b.move_tile(2, 3, Side::East, t));
        assert_eq!(b.tile(3, 1).map(|t| t.value()), Some(4));
    }

    #[test]
    fn move_onto_itself_is_noop() {
        let mut b = Board::new(2);
        b.add_tile(Tile::new(2, 1, 1));
        let t = b.tile(1, 1).unwrap();
        assert!(!b.move_tile(1, 1, Side::North, t));
        assert_eq!(b.tile(1, 1).map(|t| t.value()), Some(2));
    }

    #[test]
    #[should_panic(expected = "overflows a tile value")]
    fn merge_past_value_range_panics() {
        let mut b = Board::new(2);
        b.add_tile(Tile::new(1 << 31, 0, 0));
        b.add_tile(Tile::new(1 << 31, 0, 1));
        let t = b.tile(0, 0).unwrap();
        b.move_tile(0, 1, Side::North, t);
    }

    #[test]
    fn clear_keeps_size() {
        let mut b = Board::new(3);
        b.add_tile(Tile::new(2, 2, 2));
        b.clear();
        assert_eq!(b.size(), 3);
        assert_eq!(b.tiles().count(), 0);
        assert_eq!(b.empty_cells().count(), 9);
    }
}
