//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Independent of
//! any rendering so it can be unit-tested without a terminal.

pub mod map;

pub use tile_merge_types as types;

pub use map::{handle_key_event, should_quit};
