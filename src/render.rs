//! ASCII art assembly: luminance grid → glyph lines.

use crate::imaging::LumaGrid;
use crate::palette::{BucketWidth, glyph_for};

/// Finished ASCII art: one string per output row, every row the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Newline-joined text, no trailing newline or metadata.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Map every sample to a glyph in row-major order and reassemble lines of
/// the grid width. Line count equals the grid height; each line's character
/// count equals the grid width.
pub fn render(grid: &LumaGrid, bucket: BucketWidth) -> AsciiArt {
    let lines = grid
        .rows()
        .map(|row| row.iter().map(|&sample| glyph_for(sample, bucket)).collect())
        .collect();
    AsciiArt { lines }
}
