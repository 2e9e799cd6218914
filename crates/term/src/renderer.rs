//! TerminalRenderer: flushes styled lines to a real terminal.
//!
//! Every frame is a full redraw; boards are tiny and frames only change on input.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::board_view::Line;
use crate::types::Tile;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_frame_into(lines, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(lines: &[Line], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (y, line) in lines.iter().enumerate() {
        for span in line {
            match span.tile {
                Some(tile) => {
                    out.queue(SetForegroundColor(tile_color(tile)))?;
                    out.queue(SetAttribute(Attribute::Bold))?;
                    out.queue(Print(&span.text))?;
                    out.queue(SetAttribute(Attribute::Reset))?;
                    out.queue(ResetColor)?;
                }
                None => {
                    out.queue(Print(&span.text))?;
                }
            }
        }
        if y + 1 < lines.len() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Foreground colour for a tile; warmer as the level rises.
pub fn tile_color(tile: Tile) -> Color {
    const PALETTE: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::DarkYellow,
        Color::Red,
        Color::Magenta,
        Color::Cyan,
    ];
    match tile {
        None => Color::DarkGrey,
        Some(level) => PALETTE[(level as usize / 2).min(PALETTE.len() - 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_view::Span;

    #[test]
    fn encodes_text_of_every_span() {
        let lines = vec![
            vec![Span::chrome("+--+")],
            vec![Span::chrome("|"), Span::cell("16", Some(4)), Span::chrome("|")],
        ];
        let mut out = Vec::new();
        encode_frame_into(&lines, &mut out).unwrap();

        let s = String::from_utf8_lossy(&out);
        assert!(s.contains("+--+"));
        assert!(s.contains("16"));
        assert!(s.contains("\r\n"));
    }

    #[test]
    fn palette_saturates_at_high_levels() {
        assert_eq!(tile_color(None), Color::DarkGrey);
        assert_eq!(tile_color(Some(1)), Color::White);
        assert_eq!(tile_color(Some(200)), Color::Cyan);
    }
}
