//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Moves are
//! discrete in 2048, so there is no key-repeat handling: one press, one slide.
//! Slides pressed while the previous slide is still animating are dropped.

pub mod map;

pub use tui_2048_types as types;

pub use map::{accept_action, handle_key_event, should_quit};
