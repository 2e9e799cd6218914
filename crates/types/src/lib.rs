//! Shared types module - tiles, positions, directions and defaults
//!
//! All types here are pure data with no external dependencies, so they can be used
//! by the engine, the terminal front-end and the snapshot store alike.
//!
//! # Tiles
//!
//! A tile is an `Option<Level>`:
//!
//! - `None`: empty cell (drawn as [`EMPTY_GLYPH`])
//! - `Some(level)`: a tile whose displayed value is `2^level`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIZE` | 4 | Grid dimension (4x4) |
//! | `DEFAULT_MAX_LEVEL` | 11 | Highest level a merge may produce (2^11 = 2048) |
//! | `DEFAULT_SPAWN_LEVEL` | 1 | Level of freshly spawned tiles (2^1 = 2) |
//!
//! # Examples
//!
//! ```
//! use tile_merge_types::{display_value, Direction, Position, Tile};
//!
//! let tile: Tile = Some(3);
//! assert_eq!(display_value(tile), Some(8));
//!
//! assert!(Direction::Right.is_forward());
//! assert!(!Direction::Up.is_horizontal());
//!
//! let pos = Position::new(1, 2);
//! assert_eq!((pos.row, pos.col), (1, 2));
//! ```

/// Default grid dimension
pub const DEFAULT_SIZE: usize = 4;

/// Default level cap; tiles at this level never merge further
pub const DEFAULT_MAX_LEVEL: Level = 11;

/// Default level for spawned tiles
pub const DEFAULT_SPAWN_LEVEL: Level = 1;

/// Highest usable level cap; `2^63` is the largest displayed value that fits a `u64`
pub const LEVEL_LIMIT: Level = 63;

/// Glyph used for empty cells in text dumps
pub const EMPTY_GLYPH: char = 'ø';

/// Tile rank. The displayed magnitude is `2^level`.
pub type Level = u8;

/// A cell on the grid
///
/// - `None`: Empty cell, carries no identity
/// - `Some(level)`: Occupied by a tile of that level
pub type Tile = Option<Level>;

/// Displayed value of a tile (`2^level`).
///
/// `None` for empty cells and for levels above [`LEVEL_LIMIT`], whose value does
/// not fit a `u64`. Boards never hold such levels.
pub fn display_value(tile: Tile) -> Option<u64> {
    tile.and_then(|level| 1u64.checked_shl(u32::from(level)))
}

/// Grid coordinate, row-major with (0, 0) at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Direction tiles slide toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// True when tiles slide toward the high-index end of a line (right or down).
    pub fn is_forward(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// True for row moves (left/right).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// ```
    /// use tile_merge_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// One originally-occupied cell's fate within a single line.
///
/// Indices are line-local: column index for rows, row index for columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineChange {
    pub from: usize,
    pub to: usize,
    pub from_value: Level,
    /// `Some(from_value)`, `Some(from_value + 1)` after absorbing a neighbour,
    /// or `None` when this tile was absorbed.
    pub to_value: Tile,
}

impl LineChange {
    /// True when the tile neither moved nor changed value.
    pub fn is_noop(&self) -> bool {
        self.from == self.to && self.to_value == Some(self.from_value)
    }
}

/// One originally-occupied cell's fate on the full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change {
    pub from: Position,
    pub to: Position,
    pub from_value: Level,
    pub to_value: Tile,
}

impl Change {
    /// True when the tile neither moved nor changed value.
    pub fn is_noop(&self) -> bool {
        self.from == self.to && self.to_value == Some(self.from_value)
    }

    /// True when this tile absorbed a neighbour.
    pub fn is_merge(&self) -> bool {
        self.to_value == Some(self.from_value.saturating_add(1))
    }

    /// True when this tile was absorbed into a neighbour.
    pub fn is_absorbed(&self) -> bool {
        self.to_value.is_none()
    }
}

/// Actions a front-end can request from a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Clear the board and start over
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// ```
    /// use tile_merge_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_right_and_down() {
        assert!(!Direction::Left.is_forward());
        assert!(Direction::Right.is_forward());
        assert!(!Direction::Up.is_forward());
        assert!(Direction::Down.is_forward());
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn display_value_is_power_of_two() {
        assert_eq!(display_value(None), None);
        assert_eq!(display_value(Some(0)), Some(1));
        assert_eq!(display_value(Some(DEFAULT_MAX_LEVEL)), Some(2048));
    }

    #[test]
    fn display_value_is_monotonic_up_to_limit() {
        let values: Vec<u64> = (0..=LEVEL_LIMIT)
            .map(|l| display_value(Some(l)).unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[1] == w[0] * 2));
        assert_eq!(display_value(Some(LEVEL_LIMIT)), Some(1u64 << 63));
        assert_eq!(display_value(Some(LEVEL_LIMIT + 1)), None);
        assert_eq!(display_value(Some(Level::MAX)), None);
    }

    #[test]
    fn change_classification() {
        let merged = Change {
            from: Position::new(0, 1),
            to: Position::new(0, 0),
            from_value: 2,
            to_value: Some(3),
        };
        assert!(merged.is_merge());
        assert!(!merged.is_absorbed());
        assert!(!merged.is_noop());

        let still = Change {
            from: Position::new(2, 2),
            to: Position::new(2, 2),
            from_value: 4,
            to_value: Some(4),
        };
        assert!(still.is_noop());
    }
}
