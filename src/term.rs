//! TerminalRenderer: draws engine snapshots to a real terminal.
//!
//! Full redraw every frame; the field is small enough that diffing is not worth it.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::types::color_name;

/// Columns used to draw one field cell
const CELL_WIDTH: usize = 2;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.buf.clear();
        encode_frame_into(snapshot, &mut self.buf)?;
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

/// Terminal color for a palette index (`None` for empty cells).
pub fn palette_color(index: u8) -> Option<Color> {
    let (r, g, b) = match color_name(index).to_ascii_lowercase().as_str() {
        "tomato" => (255, 99, 71),
        "yellow" => (255, 255, 0),
        "limegreen" => (50, 205, 50),
        "royalblue" => (65, 105, 225),
        "aqua" => (0, 255, 255),
        "orange" => (255, 165, 0),
        "lavender" => (230, 230, 250),
        "violet" => (238, 130, 238),
        "hotpink" => (255, 105, 180),
        _ => return None,
    };
    Some(Color::Rgb { r, g, b })
}

/// Encode a full frame into `out` without writing to stdout.
pub fn encode_frame_into(snapshot: &GameSnapshot, out: &mut Vec<u8>) -> Result<()> {
    let border = format!("+{}+", "-".repeat(snapshot.grid[0].len() * CELL_WIDTH));
    let panel = [
        format!("Score {}", snapshot.score),
        format!("Lines {}", snapshot.lines),
        format!("Level {}", snapshot.level),
        String::new(),
        "<- ->  move".to_string(),
        "^      rotate".to_string(),
        "r      reset".to_string(),
        "q      quit".to_string(),
    ];

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(&border))?;
    out.queue(Print("\r\n"))?;

    for (y, row) in snapshot.grid.iter().enumerate() {
        out.queue(Print("|"))?;
        for &cell in row {
            match palette_color(cell) {
                Some(color) => {
                    out.queue(SetBackgroundColor(color))?;
                    out.queue(Print(" ".repeat(CELL_WIDTH)))?;
                    out.queue(ResetColor)?;
                }
                None => {
                    out.queue(Print(" .".repeat(CELL_WIDTH / 2)))?;
                }
            }
        }
        out.queue(Print("|"))?;
        if let Some(line) = panel.get(y) {
            out.queue(Print(format!("  {}", line)))?;
        }
        out.queue(Print("\r\n"))?;
    }

    out.queue(Print(&border))?;
    if !snapshot.playable() {
        out.queue(Print("\r\n"))?;
        out.queue(SetAttribute(Attribute::Bold))?;
        out.queue(Print("  GAME OVER - press r to play again"))?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }

    Ok(())
}
