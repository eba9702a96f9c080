//! TUI Cube (workspace facade crate).
//!
//! Re-exports the member crates as `tui_cube::{core,input,term,types}` and hosts the
//! command-line parsing used by the binary.

pub mod args;

pub use tui_cube_core as core;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
