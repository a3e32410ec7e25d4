//! Board engine - owns the grid and score for one game session
//!
//! Typical turn, as a driver runs it:
//!
//! 1. [`BoardEngine::apply_move`] with the decoded direction
//! 2. if the result reports `changed`, [`BoardEngine::spawn_random_tile`] exactly once
//! 3. [`BoardEngine::is_terminal`] to decide whether to halt
//!
//! [`BoardEngine::play`] does all three in order.

use tracing::{debug, info, trace};

use crate::grid::Grid;
use crate::moves::{can_slide, slide, MoveResult};
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_tile, SpawnedTile};
use crate::status::evaluate;
use crate::types::{Direction, TerminalState, STARTING_TILES};

/// Everything one [`BoardEngine::play`] call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub result: MoveResult,
    /// The tile added after a changing move; `None` when the move changed nothing
    pub spawned: Option<SpawnedTile>,
    pub state: TerminalState,
}

/// Grid plus score for a single session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    grid: Grid,
    score: u32,
    /// Moves that changed the grid this session
    moves: u32,
    /// Last state reported by `play`, used to log transitions once
    last_state: TerminalState,
}

impl BoardEngine {
    /// Start a session: empty grid, two random tiles, zero score
    pub fn new<R: TileRng + ?Sized>(rng: &mut R) -> Self {
        let mut engine = Self::from_grid(Grid::new(), 0);
        engine.seed_tiles(rng);
        engine
    }

    /// Resume from an explicit grid and score
    pub fn from_grid(grid: Grid, score: u32) -> Self {
        let last_state = evaluate(&grid);
        Self {
            grid,
            score,
            moves: 0,
            last_state,
        }
    }

    /// Throw the session away and seed a fresh one
    pub fn reset<R: TileRng + ?Sized>(&mut self, rng: &mut R) {
        info!(final_score = self.score, moves = self.moves, "resetting board");
        self.grid.clear();
        self.score = 0;
        self.moves = 0;
        self.seed_tiles(rng);
    }

    fn seed_tiles<R: TileRng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..STARTING_TILES {
            spawn_tile(&mut self.grid, rng);
        }
        self.last_state = evaluate(&self.grid);
        trace!(grid = %self.grid, "seeded board");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Slide every tile toward `direction`
    ///
    /// Always safe to call; a move that cannot change the grid reports
    /// `changed == false` and leaves grid and score as they were.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let result = slide(&mut self.grid, direction);
        if result.changed {
            self.score = self.score.saturating_add(result.score_delta);
            self.moves = self.moves.wrapping_add(1);
        }
        debug!(
            direction = result.direction.as_str(),
            changed = result.changed,
            score_delta = result.score_delta,
            movements = result.movements.len(),
            "applied move"
        );
        trace!(grid = %self.grid, "after move");
        result
    }

    /// Place a 2 or 4 on a random empty cell; no-op on a full grid
    ///
    /// Callers should only do this after a move that reported `changed`.
    pub fn spawn_random_tile<R: TileRng + ?Sized>(&mut self, rng: &mut R) -> Option<SpawnedTile> {
        spawn_tile(&mut self.grid, rng)
    }

    pub fn is_terminal(&self) -> TerminalState {
        evaluate(&self.grid)
    }

    /// Would a move toward `direction` change the grid?
    pub fn can_move(&self, direction: Direction) -> bool {
        can_slide(&self.grid, direction)
    }

    pub fn has_any_move(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }

    /// One full turn: move, spawn iff the move changed something, evaluate
    pub fn play<R: TileRng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> TurnOutcome {
        let result = self.apply_move(direction);
        let spawned = if result.changed {
            self.spawn_random_tile(rng)
        } else {
            None
        };

        let state = self.is_terminal();
        if state != self.last_state {
            info!(
                state = state.as_str(),
                score = self.score,
                moves = self.moves,
                "board state changed"
            );
            self.last_state = state;
        }

        TurnOutcome {
            result,
            spawned,
            state,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u32_grid(&mut out.grid);
        out.score = self.score;
        out.moves = self.moves;
        out.best_tile = self.grid.max_tile().map_or(0, |t| t.value());
        out.state = self.is_terminal();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::from_grid(Grid::new(), 0)
    }
}
