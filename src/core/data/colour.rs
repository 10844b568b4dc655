#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from unit-range channel intensities, truncating toward zero.
    ///
    /// Channels outside `[0, 1]` saturate at the `u8` bounds.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (255.0 * r) as u8,
            g: (255.0 * g) as u8,
            b: (255.0 * b) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unit_truncates() {
        assert_eq!(Colour::from_unit(0.5, 0.25, 1.0), Colour::new(127, 63, 255));
    }

    #[test]
    fn from_unit_saturates_out_of_range_channels() {
        assert_eq!(Colour::from_unit(-0.5, 1.5, 0.0), Colour::new(0, 255, 0));
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Colour::default(), Colour::BLACK);
    }
}
