use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    (pixel_rect.size() * 3) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} pixel rect",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB8 pixels, row-major, sized exactly to its [`PixelRect`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let index = ((pixel.y as usize) * (self.pixel_rect.width() as usize)
            + pixel.x as usize)
            * 3;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> PixelBuffer {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        PixelBuffer::from_data(pixel_rect, data).unwrap()
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let result = PixelBuffer::from_data(pixel_rect, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let result = PixelBuffer::from_data(pixel_rect, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let buffer = two_by_two();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::new(255, 0, 0));
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }).unwrap(), Colour::new(0, 255, 0));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), Colour::new(0, 0, 255));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), Colour::new(255, 255, 0));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let buffer = two_by_two();
        let pixel = Point { x: 2, y: 0 };

        assert_eq!(
            buffer.pixel(pixel),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: buffer.pixel_rect()
            })
        );
    }
}
