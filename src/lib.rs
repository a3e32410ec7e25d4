//! tui-2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`tui_2048::{core, input, term, types}`) and hosts the pieces only the
//! binary needs: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
