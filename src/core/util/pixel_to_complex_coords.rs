use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel rect",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a grid sample to the complex plane, keeping the aspect ratio square.
///
/// The viewport's `scale` is the visible width; the visible height follows
/// from the grid's aspect ratio. Screen-down is imaginary-down, and the
/// grid point `(width / 2, height / 2)` lands exactly on the center.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let grid_width = f64::from(pixel_rect.width());
    let grid_height = f64::from(pixel_rect.height());
    let aspect = grid_width / grid_height;
    let width = viewport.scale;
    let height = width / aspect;

    let real = viewport.center.real + (f64::from(pixel_position.x) / grid_width - 0.5) * width;
    let imag = viewport.center.imag - (f64::from(pixel_position.y) / grid_height - 0.5) * height;

    Ok(Complex { real, imag })
}
