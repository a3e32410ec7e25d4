//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Size**: 4x4 cells, indexed `(row, col)` from the top-left corner
//! - **Storage**: row-major, `row * GRID_SIZE + col`
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per row and per column |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `STARTING_TILES` | 2 | Tiles spawned on a fresh board |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance a spawned tile is a 2 (otherwise 4) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Tile, GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! let tile = Tile::new(8).unwrap();
//! assert_eq!(tile.doubled().map(Tile::value), Some(16));
//! assert!(Tile::new(6).is_none());
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

use std::fmt;

/// Cells per row and per column
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that ends the game as a win
pub const WIN_TILE: u32 = 2048;

/// Number of random tiles placed on a fresh board
pub const STARTING_TILES: usize = 2;

/// Probability that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// A numbered tile on the grid
///
/// The value is always a power of two between 2 and [`Tile::MAX`]. The only
/// ways to build one are [`Tile::new`], which validates, and
/// [`Tile::doubled`], which refuses to go past `MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u32);

impl Tile {
    /// The common spawn value
    pub const TWO: Tile = Tile(2);

    /// The rare spawn value
    pub const FOUR: Tile = Tile(4);

    /// Largest representable tile; two of these cannot merge
    pub const MAX: Tile = Tile(1 << 31);

    /// Build a tile from a raw value
    ///
    /// Returns `None` unless `value` is a power of two and at least 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Tile;
    ///
    /// assert_eq!(Tile::new(2), Some(Tile::TWO));
    /// assert_eq!(Tile::new(1), None);
    /// assert_eq!(Tile::new(10), None);
    /// ```
    pub const fn new(value: u32) -> Option<Self> {
        if value >= 2 && value.is_power_of_two() {
            Some(Tile(value))
        } else {
            None
        }
    }

    /// Raw numeric value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The tile produced by merging two tiles of this value
    ///
    /// `None` for [`Tile::MAX`].
    pub const fn doubled(self) -> Option<Self> {
        match self.0.checked_mul(2) {
            Some(value) => Some(Tile(value)),
            None => None,
        }
    }

    /// Whether `self` and `other` combine when one slides into the other
    pub const fn merges_with(self, other: Tile) -> bool {
        self.0 == other.0 && self.doubled().is_some()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding a tile
pub type Cell = Option<Tile>;

/// Grid coordinate, `row` top to bottom and `col` left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index
    #[inline(always)]
    pub const fn index(self) -> usize {
        (self.row as usize) * GRID_SIZE + (self.col as usize)
    }

    /// Inverse of [`Position::index`]
    #[inline(always)]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        }
    }
}

/// The four directions a move can slide the tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction from a string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scanning the grid for the end of a session
///
/// - **InProgress**: at least one move can still change the grid
/// - **Won**: a 2048 tile is present (checked first)
/// - **Lost**: the grid is full and no two neighbours are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    InProgress,
    Won,
    Lost,
}

impl TerminalState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalState::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalState::InProgress => "in_progress",
            TerminalState::Won => "won",
            TerminalState::Lost => "lost",
        }
    }
}

/// Player commands decoded from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in a direction
    Slide(Direction),
    /// Throw the board away and start a new session
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rule_constants() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(STARTING_TILES, 2);
        assert!((SPAWN_TWO_PROBABILITY - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn tile_rejects_non_powers_of_two() {
        assert!(Tile::new(0).is_none());
        assert!(Tile::new(1).is_none());
        assert!(Tile::new(3).is_none());
        assert!(Tile::new(12).is_none());
        assert_eq!(Tile::new(2), Some(Tile::TWO));
        assert_eq!(Tile::new(4), Some(Tile::FOUR));
        assert_eq!(Tile::new(65536).map(Tile::value), Some(65536));
    }

    #[test]
    fn tile_doubling_stops_at_max() {
        assert_eq!(Tile::TWO.doubled(), Some(Tile::FOUR));
        assert_eq!(Tile::new(1 << 30).and_then(Tile::doubled), Some(Tile::MAX));
        assert_eq!(Tile::MAX.doubled(), None);
        assert_eq!(Tile::new(1 << 31), Some(Tile::MAX));

        assert!(Tile::TWO.merges_with(Tile::TWO));
        assert!(!Tile::TWO.merges_with(Tile::FOUR));
        assert!(!Tile::MAX.merges_with(Tile::MAX));
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("U"), Some(Direction::Up));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn position_index_is_row_major() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(0, 3).index(), 3);
        assert_eq!(Position::new(1, 0).index(), 4);
        assert_eq!(Position::new(3, 3).index(), 15);
        assert_eq!(Position::from_index(6), Position::new(1, 2));
    }
}
