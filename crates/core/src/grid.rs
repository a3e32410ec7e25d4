//! Grid module - the 4x4 tile storage
//!
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: `(row, col)` where both range 0..3, row 0 at the top.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{Cell, Position, Tile, CELL_COUNT, GRID_SIZE};

/// The playing grid - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from raw row values, `0` meaning empty
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 8, 0],
    ///     [0, 0, 0, 16],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.tile_sum(), 30);
    ///
    /// assert!(Grid::from_rows([[3, 0, 0, 0]; 4]).is_err());
    /// ```
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let tile = Tile::new(value).ok_or(GridError::InvalidTileValue { row, col, value })?;
                grid.cells[row * GRID_SIZE + col] = Some(tile);
            }
        }
        Ok(grid)
    }

    /// Build a grid from a flat row-major slice, `0` meaning empty
    pub fn from_flat(values: &[u32]) -> Result<Self, GridError> {
        if values.len() != CELL_COUNT {
            return Err(GridError::WrongCellCount {
                expected: CELL_COUNT,
                actual: values.len(),
            });
        }
        let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (i, &v) in values.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = v;
        }
        Self::from_rows(rows)
    }

    /// Raw row values, `0` for empty cells
    pub fn to_rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.write_u32_grid(&mut out);
        out
    }

    /// Write raw values into an existing buffer (no allocation)
    pub fn write_u32_grid(&self, out: &mut [[u32; GRID_SIZE]; GRID_SIZE]) {
        for (i, cell) in self.cells.iter().enumerate() {
            out[i / GRID_SIZE][i % GRID_SIZE] = cell.map_or(0, Tile::value);
        }
    }

    /// Get the cell at `pos`
    ///
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::checked_index(pos).map(|idx| self.cells[idx])
    }

    /// Set the cell at `pos`
    ///
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::checked_index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    fn checked_index(pos: Position) -> Option<usize> {
        if pos.row as usize >= GRID_SIZE || pos.col as usize >= GRID_SIZE {
            return None;
        }
        Some(pos.index())
    }

    /// Cell by flat index; callers guarantee `idx < CELL_COUNT`
    #[inline(always)]
    pub(crate) fn at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Positions of all empty cells, in row-major order
    pub fn empty_positions(&self) -> ArrayVec<Position, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::from_index(i))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|t| t.value() as u64).sum()
    }

    /// Largest tile on the grid, if any
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Check whether any tile has exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|t| t.value() == value)
    }

    /// Check whether two horizontally or vertically adjacent tiles could merge
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let Some(tile) = self.cells[row * GRID_SIZE + col] else {
                    continue;
                };
                let mergeable = |cell: Cell| matches!(cell, Some(other) if other.merges_with(tile));
                if col + 1 < GRID_SIZE && mergeable(self.cells[row * GRID_SIZE + col + 1]) {
                    return true;
                }
                if row + 1 < GRID_SIZE && mergeable(self.cells[(row + 1) * GRID_SIZE + col]) {
                    return true;
                }
            }
        }
        false
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.cells[row * GRID_SIZE + col] {
                    Some(tile) => write!(f, "{:>5}", tile.value())?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
            if row + 1 < GRID_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
