use crate::types::{TerminalState, GRID_SIZE};

/// Plain-data copy of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values, `0` for empty
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub moves: u32,
    pub best_tile: u32,
    pub state: TerminalState,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            moves: 0,
            best_tile: 0,
            state: TerminalState::InProgress,
        }
    }
}
