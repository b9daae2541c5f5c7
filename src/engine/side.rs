use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// A side of the board, and so a direction to tilt tiles toward.
///
/// Coordinates are (column, row) with (0, 0) in the lower-left corner, so
/// `North` is the top edge (row `size - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All four sides, clockwise from `North`.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Map logical `(col, row)`, as seen when this side is held as north,
    /// onto physical board coordinates.
    ///
    /// Logical "up" (increasing row) always points toward `self`:
    /// ```
    /// use game_2048::engine::Side;
    /// assert_eq!(Side::North.to_physical(1, 2, 4), (1, 2));
    /// assert_eq!(Side::East.to_physical(0, 3, 4), (3, 3));
    /// assert_eq!(Side::South.to_physical(0, 3, 4), (3, 0));
    /// assert_eq!(Side::West.to_physical(0, 3, 4), (0, 0));
    /// ```
    #[inline]
    pub fn to_physical(self, col: usize, row: usize, size: usize) -> (usize, usize) {
        debug_assert!(col < size && row < size);
        match self {
            Side::North => (col, row),
            Side::East => (row, size - 1 - col),
            Side::South => (size - 1 - col, size - 1 - row),
            Side::West => (size - 1 - row, col),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Side {
    type Err = ParseError;

    /// Accepts compass names, arrow names and WASD keys, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" | "up" | "u" | "w" => Ok(Side::North),
            "east" | "e" | "right" | "r" | "d" => Ok(Side::East),
            "south" | "s" | "down" => Ok(Side::South),
            "west" | "left" | "l" | "a" => Ok(Side::West),
            _ => Err(ParseError::UnknownSide(s.trim().to_string())),
        }
    }
}
