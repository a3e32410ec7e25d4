//! Slide animation driven by the engine's movement records.
//!
//! The engine resolves a move instantly. This module replays the
//! [`CellMovement`] list visually: tiles that did not move are drawn from the
//! pre-move grid, moving tiles are interpolated from `from` to `to`. Nothing
//! here feeds back into the engine.

use arrayvec::ArrayVec;

use crate::core::{CellMovement, GameSnapshot};
use crate::types::{CELL_COUNT, GRID_SIZE};

/// Progress added per frame (five frames per slide).
pub const ANIMATION_STEP: f32 = 0.2;

/// Frame interval in milliseconds (~60 FPS).
pub const FRAME_MS: u64 = 16;

/// One tile in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTrack {
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// Value shown while sliding: the tile's value before it merged.
    pub value: u32,
}

impl TileTrack {
    /// Fractional `(row, col)` at `progress` in `[0, 1]`.
    pub fn position_at(&self, progress: f32) -> (f32, f32) {
        let t = progress.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| a as f32 + (b as f32 - a as f32) * t;
        (lerp(self.from.0, self.to.0), lerp(self.from.1, self.to.1))
    }
}

#[derive(Debug, Clone)]
pub struct SlideAnimation {
    /// Pre-move grid with the moving tiles lifted out.
    resting: [[u32; GRID_SIZE]; GRID_SIZE],
    tracks: ArrayVec<TileTrack, CELL_COUNT>,
    progress: f32,
}

impl SlideAnimation {
    /// Build from the snapshot taken before the move and the move's records.
    pub fn from_movements(before: &GameSnapshot, movements: &[CellMovement]) -> Self {
        let mut resting = before.grid;
        let mut tracks = ArrayVec::new();

        for m in movements {
            let (fr, fc) = (m.from.row as usize, m.from.col as usize);
            let value = resting[fr][fc];
            resting[fr][fc] = 0;
            tracks.push(TileTrack {
                from: (m.from.row, m.from.col),
                to: (m.to.row, m.to.col),
                value,
            });
        }

        Self {
            resting,
            tracks,
            progress: 0.0,
        }
    }

    /// Step one frame. Returns true once the animation has finished.
    pub fn advance(&mut self) -> bool {
        self.progress = (self.progress + ANIMATION_STEP).min(1.0);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.tracks.is_empty() || self.progress >= 1.0 - f32::EPSILON
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn resting(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.resting
    }

    pub fn tracks(&self) -> &[TileTrack] {
        &self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardEngine, Grid};
    use crate::types::Direction;

    fn animate(rows: [[u32; 4]; 4], dir: Direction) -> SlideAnimation {
        let mut engine = BoardEngine::from_grid(Grid::from_rows(rows).unwrap(), 0);
        let before = engine.snapshot();
        let result = engine.apply_move(dir);
        SlideAnimation::from_movements(&before, &result.movements)
    }

    #[test]
    fn lifts_moving_tiles_out_of_resting_grid() {
        let anim = animate([[2, 0, 2, 8], [0; 4], [0; 4], [0; 4]], Direction::Left);
        // The 2 at column 2 merges into column 0; the 8 slides to column 1.
        assert_eq!(anim.resting()[0], [2, 0, 0, 0]);
        assert_eq!(anim.tracks().len(), 2);
        assert_eq!(anim.tracks()[0].value, 2);
        assert_eq!(anim.tracks()[1].value, 8);
        assert_eq!(anim.tracks()[1].to, (0, 1));
    }

    #[test]
    fn finishes_after_five_frames() {
        let mut anim = animate([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], Direction::Left);
        assert!(!anim.is_finished());
        for _ in 0..4 {
            assert!(!anim.advance());
        }
        assert!(anim.advance());
        assert!((anim.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_move_is_already_finished() {
        let anim = animate([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], Direction::Left);
        assert!(anim.is_finished());
    }

    #[test]
    fn track_interpolates_linearly() {
        let track = TileTrack {
            from: (3, 0),
            to: (0, 0),
            value: 4,
        };
        assert_eq!(track.position_at(0.0), (3.0, 0.0));
        assert_eq!(track.position_at(0.5), (1.5, 0.0));
        assert_eq!(track.position_at(2.0), (0.0, 0.0));
    }
}
