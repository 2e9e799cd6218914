//! On-disk format - JSON document describing one board
//!
//! ```text
//! {"version":1,"size":4,"max_level":11,"cells":[[1,null,null,null],...]}
//! ```
//!
//! `null` marks an empty cell; numbers are tile levels.

use serde::{Deserialize, Serialize};

use crate::core::BoardSnapshot;
use crate::types::{Level, Tile};

/// Current document version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBoard {
    pub version: u32,
    pub size: usize,
    pub max_level: Level,
    pub cells: Vec<Vec<Tile>>,
}

impl From<BoardSnapshot> for SavedBoard {
    fn from(value: BoardSnapshot) -> Self {
        Self {
            version: FORMAT_VERSION,
            size: value.size,
            max_level: value.max_level,
            cells: value.cells,
        }
    }
}

impl From<SavedBoard> for BoardSnapshot {
    fn from(value: SavedBoard) -> Self {
        Self {
            size: value.size,
            max_level: value.max_level,
            cells: value.cells,
        }
    }
}
