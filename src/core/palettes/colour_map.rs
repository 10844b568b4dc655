use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::PaletteKinds;

/// Colours smoothed escape values with a palette; samples that never escaped are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColourMap {
    palette: PaletteKinds,
    max_iterations: u32,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(palette: PaletteKinds, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap<f64> for PaletteColourMap {
    fn map(&self, value: f64) -> Colour {
        let max = f64::from(self.max_iterations);

        if value >= max || max <= 0.0 {
            return Colour::BLACK;
        }

        self.palette.evaluate(value / max)
    }
}
