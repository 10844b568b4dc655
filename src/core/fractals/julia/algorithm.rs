use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::smoothed_escape_time;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Filled Julia set of `z² + c` for a fixed `c`; the sample is the starting `z`.
#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
    c: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = f64;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z = pixel_to_complex_coords(pixel, self.pixel_rect, self.viewport)?;

        Ok(smoothed_escape_time(z, self.c, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl JuliaAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        viewport: Viewport,
        c: Complex,
        max_iterations: u32,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !(viewport.scale.is_finite() && viewport.scale > 0.0) {
            return Err(JuliaError::InvalidScaleError {
                scale: viewport.scale,
            });
        }

        Ok(Self {
            pixel_rect,
            viewport,
            c,
            max_iterations,
        })
    }
}
