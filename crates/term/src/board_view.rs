//! BoardView: maps a `core::Board` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::types::{display_value, Tile};

/// A run of text. `tile` is set for cell contents so the renderer can colour
/// them; chrome (borders, status) leaves it `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tile: Option<Tile>,
}

impl Span {
    pub fn chrome(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tile: None,
        }
    }

    pub fn cell(text: impl Into<String>, tile: Tile) -> Self {
        Self {
            text: text.into(),
            tile: Some(tile),
        }
    }
}

pub type Line = Vec<Span>;

/// Lays the board out as a bordered table of displayed values (`2^level`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Inner width of one cell in terminal columns.
    cell_w: usize,
}

impl BoardView {
    pub fn new(cell_w: usize) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Size cells so the largest reachable value fits with one column of padding
    /// on each side.
    pub fn for_board(board: &Board) -> Self {
        let widest = display_value(Some(board.max_level()))
            .map(|v| v.to_string().len())
            .unwrap_or(1);
        Self::new(widest + 2)
    }

    pub fn cell_width(&self) -> usize {
        self.cell_w
    }

    /// Render the board followed by one status line per entry in `status`.
    pub fn render(&self, board: &Board, status: &[String]) -> Vec<Line> {
        let border = self.border(board.size());
        let mut lines = Vec::with_capacity(board.size() * 2 + 1 + status.len());

        lines.push(vec![Span::chrome(border.clone())]);
        for row in board.rows() {
            let mut line = Vec::with_capacity(row.len() * 2 + 1);
            line.push(Span::chrome("|"));
            for tile in row {
                line.push(Span::cell(self.cell_text(tile), tile));
                line.push(Span::chrome("|"));
            }
            lines.push(line);
            lines.push(vec![Span::chrome(border.clone())]);
        }
        for text in status {
            lines.push(vec![Span::chrome(text.clone())]);
        }

        lines
    }

    fn border(&self, size: usize) -> String {
        let mut s = String::with_capacity(size * (self.cell_w + 1) + 1);
        s.push('+');
        for _ in 0..size {
            s.push_str(&"-".repeat(self.cell_w));
            s.push('+');
        }
        s
    }

    fn cell_text(&self, tile: Tile) -> String {
        match display_value(tile) {
            Some(value) => format!("{:^width$}", value, width = self.cell_w),
            None => " ".repeat(self.cell_w),
        }
    }
}

/// Flatten styled lines into plain strings.
pub fn plain_text(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.iter().map(|span| span.text.as_str()).collect())
        .collect()
}
