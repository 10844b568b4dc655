use crate::core::data::colour::Colour;
use crate::core::palettes::clamp_unit;

/// Black → red → yellow → white, one channel ramping per third of the range.
#[must_use]
pub fn fire(t: f64) -> Colour {
    let x = 3.0 * clamp_unit(t);

    Colour::from_unit(
        x.min(1.0),
        (x - 1.0).clamp(0.0, 1.0),
        (x - 2.0).clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_black() {
        assert_eq!(fire(0.0), Colour::BLACK);
    }

    #[test]
    fn test_first_third_is_red() {
        assert_eq!(fire(1.0 / 3.0), Colour::new(255, 0, 0));
    }

    #[test]
    fn test_half_is_orange() {
        assert_eq!(fire(0.5), Colour::new(255, 127, 0));
    }

    #[test]
    fn test_two_thirds_is_yellow() {
        let colour = fire(2.0 / 3.0);

        assert_eq!(colour.r, 255);
        assert!(colour.g >= 254);
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_one_is_white() {
        assert_eq!(fire(1.0), Colour::new(255, 255, 255));
    }

    #[test]
    fn test_clamps_outside_unit_interval() {
        assert_eq!(fire(-0.5), fire(0.0));
        assert_eq!(fire(1.5), fire(1.0));
    }
}
