//! Tile merge (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tile_merge::{core, input, store, term, types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub mod args;

pub use tile_merge_core as core;
pub use tile_merge_input as input;
pub use tile_merge_store as store;
pub use tile_merge_term as term;
pub use tile_merge_types as types;
