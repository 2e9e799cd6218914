//! Store - save and restore boards as JSON
//!
//! The engine itself never touches files. This crate is the persistence
//! collaborator: it serializes a board's size, merge cap and tile matrix, and
//! rebuilds an identical board from that document.
//!
//! # Example
//!
//! ```
//! use tile_merge_core::Board;
//! use tile_merge_store::{from_json, to_json};
//!
//! let board = Board::new(4, 11).unwrap();
//! let json = to_json(&board).unwrap();
//! assert_eq!(from_json(&json).unwrap(), board);
//! ```

pub mod error;
pub mod format;

use std::fs;
use std::path::Path;

use log::debug;

pub use tile_merge_core as core;
pub use tile_merge_types as types;

pub use error::StoreError;
pub use format::{SavedBoard, FORMAT_VERSION};

use crate::core::Board;

/// Serialize a board to a JSON document.
pub fn to_json(board: &Board) -> Result<String, StoreError> {
    let saved = SavedBoard::from(board.snapshot());
    Ok(serde_json::to_string(&saved)?)
}

/// Rebuild a board from a JSON document.
pub fn from_json(json: &str) -> Result<Board, StoreError> {
    let saved: SavedBoard = serde_json::from_str(json)?;
    if saved.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(saved.version));
    }
    Ok(Board::from_snapshot(saved.into())?)
}

/// Write a board to `path`.
pub fn save(path: impl AsRef<Path>, board: &Board) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = to_json(board)?;
    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("saved {}x{} board to {}", board.size(), board.size(), path.display());
    Ok(())
}

/// Read a board from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Board, StoreError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let board = from_json(&json)?;
    debug!("loaded {}x{} board from {}", board.size(), board.size(), path.display());
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_rejected() {
        let json = r#"{"version":7,"size":1,"max_level":2,"cells":[[null]]}"#;
        assert!(matches!(
            from_json(json),
            Err(StoreError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn test_bad_matrix_surfaces_board_error() {
        let json = r#"{"version":1,"size":2,"max_level":11,"cells":[[null,null]]}"#;
        assert!(matches!(from_json(json), Err(StoreError::Board(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");

        let board = Board::from_rows(
            vec![vec![Some(3), None, None], vec![None; 3], vec![None, None, Some(11)]],
            11,
        )
        .unwrap();
        save(&path, &board).unwrap();
        assert_eq!(load(&path).unwrap(), board);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
