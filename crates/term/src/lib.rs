//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a framebuffer that is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - Animate slides from the engine's movement records without the engine
//!   ever waiting on the screen

pub mod animation;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use animation::{SlideAnimation, TileTrack, ANIMATION_STEP, FRAME_MS};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
