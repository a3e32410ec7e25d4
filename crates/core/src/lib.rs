//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules of 2048: the grid, the slide/merge
//! procedure, tile spawning and end-of-game detection. It has **zero
//! dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the only randomness comes from an injected [`TileRng`]
//! - **Testable**: every rule is checked in isolation
//! - **Fast**: moves, spawns and status checks never allocate
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile storage with adjacency queries
//! - [`moves`]: one slide/merge procedure parameterized by [`Traversal`]
//! - [`spawn`]: 2-or-4 spawn policy on a random empty cell
//! - [`status`]: Won / Lost / InProgress detection
//! - [`rng`]: the randomness capability and its implementations
//! - [`engine`]: [`BoardEngine`], the session-owning facade
//!
//! # Game Rules
//!
//! - **Slide**: tiles travel as far as possible toward the chosen edge
//! - **Merge**: two equal tiles that meet become one tile of double value,
//!   and that value is added to the score
//! - **Merge once**: a tile created by a merge cannot merge again in the same move
//! - **Spawn**: after every move that changed the grid, a 2 (90%) or 4 (10%)
//!   appears on a random empty cell
//! - **Win**: a 2048 tile is on the grid
//! - **Loss**: the grid is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{BoardEngine, Grid, SimpleRng};
//! use tui_2048_types::{Direction, TerminalState};
//!
//! let grid = Grid::from_rows([
//!     [2, 2, 2, 2],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! let mut engine = BoardEngine::from_grid(grid, 0);
//!
//! let result = engine.apply_move(Direction::Left);
//! assert!(result.changed);
//! assert_eq!(result.score_delta, 8);
//! assert_eq!(engine.grid().to_rows()[0], [4, 4, 0, 0]);
//!
//! let mut rng = SimpleRng::new(12345);
//! engine.spawn_random_tile(&mut rng);
//! assert_eq!(engine.is_terminal(), TerminalState::InProgress);
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod status;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{BoardEngine, TurnOutcome};
pub use error::GridError;
pub use grid::Grid;
pub use moves::{can_slide, slide, CellMovement, MoveResult, Traversal};
pub use rng::{RandRng, SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
pub use spawn::{spawn_tile, SpawnedTile};
pub use status::evaluate;
