use crate::core::actions::render_view::render_view::RenderError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ExportError {
    /// Image encoding was not compiled in.
    CapabilityMissing,
    Render(RenderError),
    Encode(String),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapabilityMissing => {
                write!(f, "PNG export unavailable: rebuild with the `png` feature")
            }
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Encode(message) => write!(f, "PNG encoding failed: {}", message),
            Self::Io { path, source } => write!(f, "cannot write {}: {}", path.display(), source),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CapabilityMissing | Self::Encode(_) => None,
            Self::Render(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
