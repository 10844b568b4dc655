use crate::controllers::export::errors::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_view::render_view::render_view;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::view::View;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

#[must_use]
pub fn export_filename(timestamp: DateTime<Local>) -> String {
    format!("fractal_{}.png", timestamp.format("%Y%m%d-%H%M%S"))
}

#[must_use]
pub fn recording_filename(frame: usize) -> String {
    format!("fractal_rec_{:03}.png", frame)
}

/// Renders `view` at `pixel_rect` and writes it to `output_dir/filename`.
///
/// Capability is checked before any rendering, so a build without image
/// support never touches the filesystem.
pub fn write_frame<P: FilePresenterPort + ?Sized>(
    presenter: &P,
    view: &View,
    pixel_rect: PixelRect,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, ExportError> {
    if !presenter.is_available() {
        return Err(ExportError::CapabilityMissing);
    }

    let buffer = render_view(view, pixel_rect)?;
    let path = output_dir.join(filename);
    presenter.present(&buffer, &path)?;

    Ok(path)
}

/// Saves the current view as `fractal_<YYYYMMDD-HHMMSS>.png` in `output_dir`.
pub fn export_snapshot<P: FilePresenterPort + ?Sized>(
    presenter: &P,
    view: &View,
    pixel_rect: PixelRect,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let filename = export_filename(Local::now());
    let path = write_frame(presenter, view, pixel_rect, output_dir, &filename)?;

    info!(path = %path.display(), "exported snapshot");

    Ok(path)
}
