use crate::controllers::export::errors::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
#[cfg(feature = "png")]
use std::fs::{self, File};
#[cfg(feature = "png")]
use std::io::{self, Write};
use std::path::Path;
#[cfg(feature = "png")]
use std::path::PathBuf;

/// Writes frames as RGB8 PNG files. Without the `png` feature it reports itself unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Sibling path the encoded bytes are staged in before the final rename.
#[cfg(feature = "png")]
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}

/// Writes `bytes` to a sibling temp file, syncs it, then renames it over `path`.
///
/// A failure removes the temp file, so `path` is either complete or untouched.
#[cfg(feature = "png")]
pub fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let staged = staging_path(path);

    let result = File::create(&staged)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staged, path));

    if result.is_err() {
        let _ = fs::remove_file(&staged);
    }

    result
}

#[cfg(feature = "png")]
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    let pixel_rect = buffer.pixel_rect();
    let mut encoded = Vec::new();

    PngEncoder::new(&mut encoded)
        .write_image(
            buffer.buffer(),
            pixel_rect.width(),
            pixel_rect.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|err| ExportError::Encode(err.to_string()))?;

    Ok(encoded)
}

impl FilePresenterPort for PngFilePresenter {
    fn is_available(&self) -> bool {
        cfg!(feature = "png")
    }

    #[cfg(feature = "png")]
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        let encoded = encode_png(buffer)?;

        write_atomically(filepath, &encoded).map_err(|source| ExportError::Io {
            path: filepath.to_path_buf(),
            source,
        })
    }

    #[cfg(not(feature = "png"))]
    fn present(&self, _: &PixelBuffer, _: &Path) -> Result<(), ExportError> {
        Err(ExportError::CapabilityMissing)
    }
}

#[cfg(all(test, feature = "png"))]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn two_by_one() -> PixelBuffer {
        PixelBuffer::from_data(PixelRect::new(2, 1).unwrap(), vec![255, 0, 0, 0, 0, 255]).unwrap()
    }

    #[test]
    fn encodes_a_png_stream() {
        let encoded = encode_png(&two_by_one()).unwrap();

        assert_eq!(encoded[..8], PNG_SIGNATURE);
    }

    #[test]
    fn writes_a_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        PngFilePresenter::new().present(&two_by_one(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");

        let result = PngFilePresenter::new().present(&two_by_one(), &path);

        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn completed_write_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        PngFilePresenter::new().present(&two_by_one(), &path).unwrap();

        assert!(path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn failed_rename_keeps_target_and_removes_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by a file rename.
        let path = dir.path().join("occupied.png");
        std::fs::create_dir(&path).unwrap();

        let result = write_atomically(&path, b"partial");

        assert!(result.is_err());
        assert!(path.is_dir());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn is_available_with_png_feature() {
        assert!(PngFilePresenter::new().is_available());
    }
}
