//! Terminal input module (viewer-facing).
//!
//! Maps `crossterm` key events into [`crate::types::ViewerAction`]. The renderer itself
//! never reads input; the binary polls keys during the inter-frame delay.

pub mod map;

pub use tui_cube_types as types;

pub use map::{handle_key_event, should_quit};
