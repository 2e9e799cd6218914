use crate::board::Board;
use crate::error::BoardError;
use crate::types::{Level, Tile};

/// Everything needed to rebuild a [`Board`] exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub size: usize,
    pub max_level: Level,
    /// Tile matrix, row-major (`cells[row][col]`).
    pub cells: Vec<Vec<Tile>>,
}

impl BoardSnapshot {
    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|t| t.is_some()).count()
    }
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size(),
            max_level: self.max_level(),
            cells: self.rows(),
        }
    }

    /// Restore a board, rejecting snapshots whose matrix does not match `size`.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, BoardError> {
        if snapshot.cells.len() != snapshot.size {
            return Err(BoardError::InvalidSnapshot(format!(
                "expected {} rows, found {}",
                snapshot.size,
                snapshot.cells.len()
            )));
        }
        Board::from_rows(snapshot.cells, snapshot.max_level)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(value: &Board) -> Self {
        value.snapshot()
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(value: BoardSnapshot) -> Result<Self, Self::Error> {
        Board::from_snapshot(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_restores_identical_board() {
        let board = Board::from_rows(
            vec![
                vec![Some(1), None, None],
                vec![None, Some(4), None],
                vec![None, None, Some(9)],
            ],
            9,
        )
        .unwrap();

        let snap = board.snapshot();
        assert_eq!(snap.size, 3);
        assert_eq!(snap.max_level, 9);
        assert_eq!(snap.occupied(), 3);
        assert_eq!(Board::from_snapshot(snap).unwrap(), board);
    }

    #[test]
    fn test_snapshot_size_mismatch_rejected() {
        let snap = BoardSnapshot {
            size: 4,
            max_level: 11,
            cells: vec![vec![None; 3]; 3],
        };
        assert!(matches!(
            Board::from_snapshot(snap),
            Err(BoardError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_level_above_cap_rejected() {
        let snap = BoardSnapshot {
            size: 2,
            max_level: 3,
            cells: vec![vec![Some(4), None], vec![None, None]],
        };
        assert!(Board::try_from(snap).is_err());
    }
}
