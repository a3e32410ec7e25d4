//! Spawn policy - where and what the next random tile is

use tracing::debug;

use crate::grid::Grid;
use crate::rng::TileRng;
use crate::types::{Position, Tile, SPAWN_TWO_PROBABILITY};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub position: Position,
    pub tile: Tile,
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell
///
/// A full grid is left alone and `None` is returned. The empty-cell draw
/// happens before the value draw.
pub fn spawn_tile<R: TileRng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<SpawnedTile> {
    let empty = grid.empty_positions();
    if empty.is_empty() {
        debug!("spawn skipped: grid is full");
        return None;
    }

    // An out-of-range draw wraps instead of panicking.
    let position = empty[rng.pick_index(empty.len()) % empty.len()];
    let tile = if rng.sample_unit() < SPAWN_TWO_PROBABILITY {
        Tile::TWO
    } else {
        Tile::FOUR
    };
    grid.set(position, Some(tile));

    debug!(row = position.row, col = position.col, value = tile.value(), "spawned tile");
    Some(SpawnedTile { position, tile })
}
