//! Error types for board construction and operations.

use crate::types::Level;

/// Precondition violations raised by [`crate::Board`].
///
/// Every variant is detected before the grid is touched, so a failed call never
/// leaves the board partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("index {index} out of range for board of size {size}")]
    InvalidIndex { index: usize, size: usize },

    #[error("level {level} is too high (max level is {max_level})")]
    LevelTooHigh { level: Level, max_level: Level },

    #[error("invalid board dimensions: size {size}, max level {max_level} (need size >= 1, max level 2..=63)")]
    InvalidDimensions { size: usize, max_level: Level },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
