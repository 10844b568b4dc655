use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::view::View;
use crate::core::fractals::view_algorithm::{ViewAlgorithm, ViewAlgorithmError};
use crate::core::palettes::colour_map::PaletteColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    Algorithm(ViewAlgorithmError),
    Sample(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "cannot build fractal algorithm: {}", err),
            Self::Sample(err) => write!(f, "sample failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Sample(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ViewAlgorithmError> for RenderError {
    fn from(err: ViewAlgorithmError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Sample(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one snapshot of the view into an RGB pixel buffer.
///
/// Samples come from the Mandelbrot or Julia algorithm selected by the view
/// and are coloured with the view's palette.
pub fn render_view(view: &View, pixel_rect: PixelRect) -> Result<PixelBuffer, RenderError> {
    let algorithm = ViewAlgorithm::from_view(view, pixel_rect)?;
    let values = generate_fractal_rayon(&algorithm)?;
    let colour_map = PaletteColourMap::new(view.palette(), view.max_iter);

    Ok(generate_pixel_buffer(values, &colour_map, pixel_rect)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;

    #[test]
    fn test_buffer_matches_grid() {
        let pixel_rect = PixelRect::for_terminal(80, 24).unwrap();

        let buffer = render_view(&View::default(), pixel_rect).unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer().len(), 80 * 48 * 3);
    }

    #[test]
    fn test_view_center_is_inside_the_set() {
        let pixel_rect = PixelRect::for_terminal(80, 24).unwrap();

        let buffer = render_view(&View::default(), pixel_rect).unwrap();

        assert_eq!(buffer.pixel(Point { x: 40, y: 24 }), Ok(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 40, y: 25 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_corner_escapes() {
        let pixel_rect = PixelRect::for_terminal(80, 24).unwrap();

        let buffer = render_view(&View::default(), pixel_rect).unwrap();

        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_julia_mode_renders_a_different_image() {
        let pixel_rect = PixelRect::for_terminal(60, 12).unwrap();
        let mandelbrot = View::default();
        let julia = View {
            julia_mode: true,
            ..View::default()
        };

        let a = render_view(&mandelbrot, pixel_rect).unwrap();
        let b = render_view(&julia, pixel_rect).unwrap();

        assert_ne!(a.buffer(), b.buffer());
    }

    #[test]
    fn test_invalid_view_is_rejected() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();
        let view = View {
            max_iter: 0,
            ..View::default()
        };

        assert_eq!(
            render_view(&view, pixel_rect),
            Err(RenderError::Algorithm(ViewAlgorithmError::Mandelbrot(
                MandelbrotError::ZeroMaxIterationsError
            )))
        );
    }
}
