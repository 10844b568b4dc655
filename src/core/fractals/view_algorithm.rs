use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view::View;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ViewAlgorithmError {
    Mandelbrot(MandelbrotError),
    Julia(JuliaError),
}

impl fmt::Display for ViewAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "mandelbrot settings invalid: {}", err),
            Self::Julia(err) => write!(f, "julia settings invalid: {}", err),
        }
    }
}

impl Error for ViewAlgorithmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::Julia(err) => Some(err),
        }
    }
}

/// The escape-time algorithm selected by a [`View`]'s mode.
#[derive(Debug, PartialEq)]
pub enum ViewAlgorithm {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl ViewAlgorithm {
    pub fn from_view(view: &View, pixel_rect: PixelRect) -> Result<Self, ViewAlgorithmError> {
        let viewport = Viewport::from(view);

        if view.julia_mode {
            JuliaAlgorithm::new(pixel_rect, viewport, view.julia_c, view.max_iter)
                .map(Self::Julia)
                .map_err(ViewAlgorithmError::Julia)
        } else {
            MandelbrotAlgorithm::new(pixel_rect, viewport, view.max_iter)
                .map(Self::Mandelbrot)
                .map_err(ViewAlgorithmError::Mandelbrot)
        }
    }
}

impl FractalAlgorithm for ViewAlgorithm {
    type Success = f64;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.compute(pixel),
            Self::Julia(algorithm) => algorithm.compute(pixel),
        }
    }

    fn pixel_rect(&self) -> PixelRect {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.pixel_rect(),
            Self::Julia(algorithm) => algorithm.pixel_rect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julia_mode_selects_julia() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();
        let mut view = View::default();

        assert!(matches!(
            ViewAlgorithm::from_view(&view, pixel_rect),
            Ok(ViewAlgorithm::Mandelbrot(_))
        ));

        view.julia_mode = true;

        assert!(matches!(
            ViewAlgorithm::from_view(&view, pixel_rect),
            Ok(ViewAlgorithm::Julia(_))
        ));
    }

    #[test]
    fn invalid_view_is_reported_per_mode() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();
        let view = View {
            max_iter: 0,
            ..View::default()
        };

        assert_eq!(
            ViewAlgorithm::from_view(&view, pixel_rect),
            Err(ViewAlgorithmError::Mandelbrot(
                MandelbrotError::ZeroMaxIterationsError
            ))
        );
    }

    #[test]
    fn pixel_rect_is_forwarded() {
        let pixel_rect = PixelRect::new(6, 8).unwrap();
        let algorithm = ViewAlgorithm::from_view(&View::default(), pixel_rect).unwrap();

        assert_eq!(algorithm.pixel_rect(), pixel_rect);
    }
}
