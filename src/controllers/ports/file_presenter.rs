use std::path::Path;

use crate::controllers::export::errors::ExportError;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a rendered frame to an image file.
pub trait FilePresenterPort: Send + Sync {
    /// Whether this build can encode images at all.
    fn is_available(&self) -> bool;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError>;
}
