//! Core engine - pure, deterministic, and testable
//!
//! This crate holds the whole puzzle engine: sliding and merging lines, the
//! board that applies moves to every row or column, and tile spawning.
//! It has no dependencies on terminals, files, or networking, making it:
//!
//! - **Deterministic**: moves are pure functions of the grid; spawns draw from a
//!   caller-supplied RNG
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: usable from a terminal, a GUI, or a headless solver
//!
//! # Module Structure
//!
//! - [`line`]: compaction and at-most-once merging of a single row or column
//! - [`board`]: the grid, row/column access, the four moves, and spawning
//! - [`game`]: a session that spawns after every accepted move
//! - [`rng`]: deterministic LCG implementing `rand::RngCore`
//! - [`snapshot`]: plain data needed to rebuild a board exactly
//! - [`config`]: board dimensions, merge cap, spawn level and seed
//! - [`error`]: precondition violations
//!
//! # Rules
//!
//! - Tiles slide as far as possible toward the wall of the move
//! - Equal neighbours merge into one tile of the next level, pairing from the wall
//!   outward; a tile merges at most once per move and a merged tile never chains
//! - Tiles at `max_level` never merge
//! - A move reports only cells that moved or changed value; an empty report means
//!   the move did nothing
//!
//! # Example
//!
//! ```
//! use rand::rngs::mock::StepRng;
//! use tile_merge_core::Board;
//! use tile_merge_types::Position;
//!
//! let mut board = Board::new(4, 11).unwrap();
//! assert!(board.move_left().is_empty());
//!
//! // StepRng(0, 0) always picks the first empty cell.
//! let mut rng = StepRng::new(0, 0);
//! assert_eq!(board.spawn(1, &mut rng).unwrap(), Some(Position::new(0, 0)));
//!
//! let changes = board.move_right();
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].to, Position::new(0, 3));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tile_merge_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::BoardError;
pub use game::{Game, MoveOutcome};
pub use line::transform;
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
