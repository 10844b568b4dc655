use crate::core::data::complex::Complex;
use crate::core::data::view::View;

/// The visible window of the complex plane: its center and its width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center: Complex,
    pub scale: f64,
}

impl From<&View> for Viewport {
    fn from(view: &View) -> Self {
        Self {
            center: view.center(),
            scale: view.scale,
        }
    }
}
