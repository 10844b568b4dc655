use crate::core::data::colour::Colour;
use crate::core::palettes::clamp_unit;

/// Linear ramp through the blue/cyan range; green and blue never fall to zero.
#[must_use]
pub fn ice(t: f64) -> Colour {
    let x = clamp_unit(t);

    Colour::from_unit(0.2 * x, 0.3 + 0.6 * x, 0.5 + 0.5 * x)
}
