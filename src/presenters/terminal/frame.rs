use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::presenters::terminal::ansi;

/// Lower half block: the glyph paints the bottom half in the foreground colour.
pub const HALF_BLOCK: char = '\u{2584}';

/// One text cell showing two stacked sub-pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub fg: Colour,
    pub bg: Colour,
    pub glyph: char,
}

/// A full grid of cells, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// Folds every pair of pixel rows into one row of cells.
    ///
    /// `fg` carries the top sample and `bg` the bottom one; a trailing odd
    /// pixel row gets a black bottom.
    #[must_use]
    pub fn from_pixel_buffer(buffer: &PixelBuffer) -> Self {
        let pixel_rect = buffer.pixel_rect();
        let sample = |x: u32, y: u32| buffer.pixel(Point { x, y }).unwrap_or(Colour::BLACK);

        let rows = (0..pixel_rect.text_rows())
            .map(|row| {
                (0..pixel_rect.width())
                    .map(|x| Cell {
                        fg: sample(x, row * 2),
                        bg: sample(x, row * 2 + 1),
                        glyph: HALF_BLOCK,
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// One ANSI line per row, each ending with a colour reset.
    #[must_use]
    pub fn to_ansi_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|cells| {
                let mut line = String::with_capacity(cells.len() * 40);
                for cell in cells {
                    line.push_str(&ansi::fg(cell.fg));
                    line.push_str(&ansi::bg(cell.bg));
                    line.push(cell.glyph);
                }
                line.push_str(ansi::RESET);
                line
            })
            .collect()
    }

    /// The whole grid as one string, rows joined with raw-mode line breaks.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        self.to_ansi_lines().join(ansi::LINE_BREAK)
    }
}
