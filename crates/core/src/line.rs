//! Line module - slide and merge a single row or column
//!
//! A line is a 1D view of the grid (one row or one column). Transforming it
//! compacts occupied tiles against the wall they slide toward, then merges equal
//! neighbours pairwise starting from the wall:
//!
//! ```text
//! [2, ø, 2, 0]  --left-->  [3, 0, ø, ø]
//! [1, 1, 1, ø]  --left-->  [2, 1, ø, ø]   (one merge, nearest the wall)
//! [1, 1, 1, ø]  --right--> [ø, ø, 1, 2]
//! ```
//!
//! The transform never touches the grid; it only reports where every occupied
//! cell ends up so the board can write the line back.

use crate::types::{Level, LineChange, Tile};

/// Slide and merge one line.
///
/// `forward == false` slides toward index 0 (left/up), `forward == true` toward
/// the last index (right/down). Tiles at or above `max_level` never merge.
///
/// Returns one entry per occupied input cell, ordered from the wall outward.
/// Empty cells produce no entry.
///
/// ```
/// use tile_merge_core::line::transform;
///
/// let changes = transform(&[Some(2), None, Some(2), Some(0)], false, 11);
/// assert_eq!(changes.len(), 3);
/// assert_eq!((changes[0].to, changes[0].to_value), (0, Some(3)));
/// assert_eq!((changes[1].to, changes[1].to_value), (0, None));
/// assert_eq!((changes[2].to, changes[2].to_value), (1, Some(0)));
/// ```
pub fn transform(line: &[Tile], forward: bool, max_level: Level) -> Vec<LineChange> {
    let len = line.len();

    // Stable compaction: occupied cells in original order, read from the wall outward.
    let mut occupied: Vec<(usize, Level)> = line
        .iter()
        .enumerate()
        .filter_map(|(idx, tile)| tile.map(|level| (idx, level)))
        .collect();
    if forward {
        occupied.reverse();
    }

    let to_index = |slot: usize| if forward { len - 1 - slot } else { slot };

    let mut changes = Vec::with_capacity(occupied.len());
    let mut cells = occupied.into_iter().peekable();
    let mut slot = 0;

    while let Some((from, value)) = cells.next() {
        let to = to_index(slot);
        match cells.peek() {
            Some(&(next_from, next_value)) if next_value == value && value < max_level => {
                cells.next();
                changes.push(LineChange {
                    from,
                    to,
                    from_value: value,
                    to_value: Some(value + 1),
                });
                changes.push(LineChange {
                    from: next_from,
                    to,
                    from_value: value,
                    to_value: None,
                });
            }
            _ => changes.push(LineChange {
                from,
                to,
                from_value: value,
                to_value: Some(value),
            }),
        }
        slot += 1;
    }

    changes
}

/// Render the resulting line described by `changes` (length `len`).
pub fn apply_changes(changes: &[LineChange], len: usize) -> Vec<Tile> {
    let mut out = vec![None; len];
    for change in changes {
        if let Some(value) = change.to_value {
            out[change.to] = Some(value);
        }
    }
    out
}
