use crate::config::GridSettings;
use std::io;

/// Reports the terminal size in text cells as `(cols, rows)`.
pub trait SizeProbe {
    fn size(&self) -> io::Result<(u16, u16)>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermSizeProbe {}

impl SizeProbe for CrosstermSizeProbe {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

/// The fractal grid for a reported terminal size.
///
/// A failed query falls back to the configured size; rows leave room for
/// the status lines and both dimensions respect the minimum grid.
#[must_use]
pub fn effective_size(reported: io::Result<(u16, u16)>, grid: &GridSettings) -> (u16, u16) {
    let (cols, rows) = match reported {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (cols, rows),
        _ => (grid.fallback_cols, grid.fallback_rows),
    };

    (
        cols.max(grid.min_cols),
        rows.saturating_sub(grid.row_margin).max(grid.min_rows),
    )
}
