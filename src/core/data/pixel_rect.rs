use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// The sample grid of a frame, anchored at the origin.
///
/// A terminal of `cols × rows` text cells is sampled as `cols × rows*2`
/// pixels because every cell stacks two half-block sub-pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    /// Sample grid for a terminal area of `cols × rows` text cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Result<Self, PixelRectError> {
        Self::new(u32::from(cols), u32::from(rows) * 2)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of text rows needed to show this grid with half-blocks.
    #[must_use]
    pub fn text_rows(&self) -> u32 {
        self.height.div_ceil(2)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Every point of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(80, 48).unwrap();

        assert_eq!(rect.width(), 80);
        assert_eq!(rect.height(), 48);
        assert_eq!(rect.size(), 3840);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            PixelRect::new(10, 0),
            Err(PixelRectError::InvalidSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_for_terminal_doubles_rows() {
        let rect = PixelRect::for_terminal(80, 22).unwrap();

        assert_eq!(rect.width(), 80);
        assert_eq!(rect.height(), 44);
        assert_eq!(rect.text_rows(), 22);
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(10, 4).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 9, y: 3 }));
        assert!(!rect.contains_point(Point { x: 10, y: 0 }));
        assert!(!rect.contains_point(Point { x: 0, y: 4 }));
    }

    #[test]
    fn test_points_are_row_major() {
        let rect = PixelRect::new(3, 2).unwrap();
        let points: Vec<Point> = rect.points().collect();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point { x: 0, y: 0 });
        assert_eq!(points[2], Point { x: 2, y: 0 });
        assert_eq!(points[3], Point { x: 0, y: 1 });
        assert_eq!(points[5], Point { x: 2, y: 1 });
    }
}
