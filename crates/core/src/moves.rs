//! Move module - the slide/merge procedure shared by all four directions
//!
//! Every direction is the same algorithm run over a different traversal of
//! the flat grid. A [`Traversal`] maps `(line, k)` to a cell index, where
//! `line` selects a row (Left/Right) or column (Up/Down) and `k` counts
//! cells starting from the edge the tiles slide toward. Within a line the
//! tile at `k` always tries to move to `k - 1`.
//!
//! Merge rule: a tile created by a merge cannot merge again in the same
//! move, so `[2, 2, 2, 2]` moved left yields `[4, 4, _, _]`. Two
//! [`Tile::MAX`] tiles block each other instead of merging.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Direction, Position, Tile, CELL_COUNT, GRID_SIZE};

/// One tile's journey during a move
///
/// `value` is what the tile holds on arrival at `to`: the doubled value for
/// a merge. When a later tile merges into that cell, the merge shows up on
/// the later tile's own entry, so replaying the entries in order over the
/// old grid reproduces the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMovement {
    pub from: Position,
    pub to: Position,
    pub value: Tile,
    pub merged: bool,
}

/// Outcome of one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub direction: Direction,
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Sum of the values created by merges during this move
    pub score_delta: u32,
    /// One entry per tile that relocated or merged away, per line in traversal order
    pub movements: ArrayVec<CellMovement, CELL_COUNT>,
}

impl MoveResult {
    fn unchanged(direction: Direction) -> Self {
        Self {
            direction,
            changed: false,
            score_delta: 0,
            movements: ArrayVec::new(),
        }
    }

    /// Number of merges resolved by this move
    pub fn merge_count(&self) -> usize {
        self.movements.iter().filter(|m| m.merged).count()
    }
}

/// Traversal of the flat grid for one direction
///
/// `index(line, k) = origin + line * line_stride + k * step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    origin: isize,
    line_stride: isize,
    step: isize,
}

impl Traversal {
    pub const fn for_direction(direction: Direction) -> Self {
        const N: isize = GRID_SIZE as isize;
        match direction {
            Direction::Left => Self {
                origin: 0,
                line_stride: N,
                step: 1,
            },
            Direction::Right => Self {
                origin: N - 1,
                line_stride: N,
                step: -1,
            },
            Direction::Up => Self {
                origin: 0,
                line_stride: 1,
                step: N,
            },
            Direction::Down => Self {
                origin: N * (N - 1),
                line_stride: 1,
                step: -N,
            },
        }
    }

    /// Flat index of the `k`-th cell (counted from the leading edge) of `line`
    #[inline(always)]
    pub const fn index(&self, line: usize, k: usize) -> usize {
        (self.origin + (line as isize) * self.line_stride + (k as isize) * self.step) as usize
    }
}

/// Slide and merge every line of `grid` toward `direction`, in place
///
/// This never fails and never allocates. When nothing can move the grid is
/// left untouched and the result reports `changed == false`.
pub fn slide(grid: &mut Grid, direction: Direction) -> MoveResult {
    let traversal = Traversal::for_direction(direction);
    let mut result = MoveResult::unchanged(direction);

    for line in 0..GRID_SIZE {
        // Merge mask for this line, indexed by k.
        let mut merged = [false; GRID_SIZE];

        for start in 1..GRID_SIZE {
            let Some(tile) = grid.at(traversal.index(line, start)) else {
                continue;
            };

            let mut k = start;
            let mut value = tile;
            let mut did_merge = false;

            while k > 0 {
                let here = traversal.index(line, k);
                let next = traversal.index(line, k - 1);
                match grid.at(next) {
                    None => {
                        grid.put(next, Some(value));
                        grid.put(here, None);
                        k -= 1;
                    }
                    Some(target) if target.merges_with(value) && !merged[k - 1] && !merged[k] => {
                        let Some(combined) = target.doubled() else {
                            break;
                        };
                        value = combined;
                        grid.put(next, Some(value));
                        grid.put(here, None);
                        merged[k - 1] = true;
                        result.score_delta = result.score_delta.saturating_add(value.value());
                        did_merge = true;
                        k -= 1;
                        break;
                    }
                    Some(_) => break,
                }
            }

            if k != start {
                result.changed = true;
                result.movements.push(CellMovement {
                    from: Position::from_index(traversal.index(line, start)),
                    to: Position::from_index(traversal.index(line, k)),
                    value,
                    merged: did_merge,
                });
            }
        }
    }

    result
}

/// Check whether a move in `direction` would change `grid`, without mutating it
///
/// A line can move iff some tile has an empty cell or a tile it merges with
/// directly ahead of it in the slide direction.
pub fn can_slide(grid: &Grid, direction: Direction) -> bool {
    let traversal = Traversal::for_direction(direction);
    for line in 0..GRID_SIZE {
        for k in 1..GRID_SIZE {
            let Some(tile) = grid.at(traversal.index(line, k)) else {
                continue;
            };
            match grid.at(traversal.index(line, k - 1)) {
                None => return true,
                Some(ahead) if ahead.merges_with(tile) => return true,
                Some(_) => {}
            }
        }
    }
    false
}
