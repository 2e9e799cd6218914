//! Board module - owns the grid and applies moves
//!
//! The board is a `size x size` grid where each cell is empty or holds a tile level.
//! Uses a flat row-major vector: cell (row, col) lives at `row * size + col`.
//! Coordinates: (0, 0) is the top-left; left/up slide toward index 0, right/down
//! toward `size - 1`.
//!
//! Moves are deterministic. Only [`Board::spawn`] is random, and it draws from a
//! caller-supplied RNG.

use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::error::BoardError;
use crate::line;
use crate::types::{
    Change, Direction, Level, Position, Tile, DEFAULT_MAX_LEVEL, DEFAULT_SIZE, EMPTY_GLYPH,
    LEVEL_LIMIT,
};

/// The puzzle grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    max_level: Level,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Board {
    /// Create an empty `size x size` board whose merges cap at `max_level`.
    pub fn new(size: usize, max_level: Level) -> Result<Self, BoardError> {
        if size == 0 || !(2..=LEVEL_LIMIT).contains(&max_level) {
            return Err(BoardError::InvalidDimensions { size, max_level });
        }
        Ok(Self {
            size,
            max_level,
            cells: vec![None; size * size],
        })
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must form a non-empty square and no tile may exceed `max_level`.
    pub fn from_rows(rows: Vec<Vec<Tile>>, max_level: Level) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Self::new(size, max_level)?;

        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != size {
                return Err(BoardError::InvalidSnapshot(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    tiles.len(),
                    size
                )));
            }
            if let Some(level) = tiles.iter().flatten().find(|&&l| l > max_level) {
                return Err(BoardError::InvalidSnapshot(format!(
                    "row {} holds level {} above max level {}",
                    row, level, max_level
                )));
            }
            let start = row * size;
            board.cells[start..start + size].copy_from_slice(&tiles);
        }

        Ok(board)
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    fn check_index(&self, index: usize) -> Result<(), BoardError> {
        if index >= self.size {
            return Err(BoardError::InvalidIndex {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Grid dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Highest level a merge may produce
    pub fn max_level(&self) -> Level {
        self.max_level
    }

    /// Get the tile at `pos`.
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<Tile>, BoardError> {
        self.check_index(i)?;
        Ok(self.row_unchecked(i))
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Result<Vec<Tile>, BoardError> {
        self.check_index(j)?;
        Ok(self.col_unchecked(j))
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(<[Tile]>::to_vec).collect()
    }

    fn row_unchecked(&self, i: usize) -> Vec<Tile> {
        let start = i * self.size;
        self.cells[start..start + self.size].to_vec()
    }

    fn col_unchecked(&self, j: usize) -> Vec<Tile> {
        self.cells
            .iter()
            .skip(j)
            .step_by(self.size)
            .copied()
            .collect()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Highest level on the board, if any tile is present.
    pub fn max_tile(&self) -> Option<Level> {
        self.cells.iter().flatten().copied().max()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Place a tile of `level` on a uniformly random empty cell.
    ///
    /// Returns `Ok(None)` without touching the grid when no cell is empty.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        level: Level,
        rng: &mut R,
    ) -> Result<Option<Position>, BoardError> {
        if level >= self.max_level {
            return Err(BoardError::LevelTooHigh {
                level,
                max_level: self.max_level,
            });
        }

        let empty = self.empty_positions();
        if empty.is_empty() {
            debug!("spawn of level {} skipped: board is full", level);
            return Ok(None);
        }

        let pos = empty[rng.gen_range(0..empty.len())];
        let idx = pos.row * self.size + pos.col;
        self.cells[idx] = Some(level);
        debug!(
            "spawned level {} at ({}, {}), {} empty cells left",
            level,
            pos.row,
            pos.col,
            empty.len() - 1
        );
        Ok(Some(pos))
    }

    /// Slide toward column 0.
    pub fn move_left(&mut self) -> Vec<Change> {
        self.apply_row_move(false)
    }

    /// Slide toward the last column.
    pub fn move_right(&mut self) -> Vec<Change> {
        self.apply_row_move(true)
    }

    /// Slide toward row 0.
    pub fn move_up(&mut self) -> Vec<Change> {
        self.apply_col_move(false)
    }

    /// Slide toward the last row.
    pub fn move_down(&mut self) -> Vec<Change> {
        self.apply_col_move(true)
    }

    /// Apply a move in `direction`. An empty result means nothing changed.
    pub fn apply(&mut self, direction: Direction) -> Vec<Change> {
        let changes = match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        };
        trace!("move {}: {} changes", direction.as_str(), changes.len());
        changes
    }

    fn apply_row_move(&mut self, forward: bool) -> Vec<Change> {
        let mut changes = Vec::new();

        for i in 0..self.size {
            let line_changes = line::transform(&self.row_unchecked(i), forward, self.max_level);

            let start = i * self.size;
            let line = line::apply_changes(&line_changes, self.size);
            self.cells[start..start + self.size].copy_from_slice(&line);

            for c in line_changes {
                let change = Change {
                    from: Position::new(i, c.from),
                    to: Position::new(i, c.to),
                    from_value: c.from_value,
                    to_value: c.to_value,
                };
                if !change.is_noop() {
                    changes.push(change);
                }
            }
        }

        changes
    }

    fn apply_col_move(&mut self, forward: bool) -> Vec<Change> {
        let mut changes = Vec::new();

        for j in 0..self.size {
            let line_changes = line::transform(&self.col_unchecked(j), forward, self.max_level);

            let line = line::apply_changes(&line_changes, self.size);
            for (i, tile) in line.into_iter().enumerate() {
                self.cells[i * self.size + j] = tile;
            }

            for c in line_changes {
                let change = Change {
                    from: Position::new(c.from, j),
                    to: Position::new(c.to, j),
                    from_value: c.from_value,
                    to_value: c.to_value,
                };
                if !change.is_noop() {
                    changes.push(change);
                }
            }
        }

        changes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_level: DEFAULT_MAX_LEVEL,
            cells: vec![None; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

/// Debug dump: one tab after every cell, a blank line after every row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                match cell {
                    Some(level) => write!(f, "{}\t", level)?,
                    None => write!(f, "{}\t", EMPTY_GLYPH)?,
                }
            }
            f.write_str("\n\n")?;
        }
        Ok(())
    }
}
