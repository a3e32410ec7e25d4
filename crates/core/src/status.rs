//! Terminal-state detection

use crate::grid::Grid;
use crate::types::{TerminalState, WIN_TILE};

/// Classify `grid`: Won if a 2048 tile is present, otherwise InProgress while
/// an empty cell or an adjacent equal pair remains, otherwise Lost.
pub fn evaluate(grid: &Grid) -> TerminalState {
    if grid.contains(WIN_TILE) {
        return TerminalState::Won;
    }
    if !grid.is_full() || grid.has_adjacent_pair() {
        return TerminalState::InProgress;
    }
    TerminalState::Lost
}
