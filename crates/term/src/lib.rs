//! Terminal front-end module.
//!
//! A small rendering layer for playing in a terminal. The view turns a board into
//! styled lines (pure, testable); the renderer flushes those lines through
//! crossterm.

pub mod board_view;
pub mod renderer;

pub use tile_merge_core as core;
pub use tile_merge_types as types;

pub use board_view::{plain_text, BoardView, Line, Span};
pub use renderer::{encode_frame_into, tile_color, TerminalRenderer};
