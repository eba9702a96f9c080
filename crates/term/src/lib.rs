//! Terminal output sinks.
//!
//! Both sinks implement [`core::FrameSink`](tui_cube_core::FrameSink) and only ever read
//! a finished frame.
//!
//! - [`TerminalRenderer`]: raw mode + alternate screen, diffed redraws via crossterm
//! - [`PlainSink`]: cursor-home and raw rows on any `Write`, usable without a tty

pub mod plain;
pub mod renderer;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use plain::{encode_plain_into, PlainSink};
pub use renderer::{encode_diff_into, encode_full_into, encode_leave_into, TerminalRenderer};
