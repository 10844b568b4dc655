use crate::core::data::colour::Colour;
use crate::core::palettes::clamp_unit;
use std::f64::consts::TAU;

const MIDPOINT: f64 = 0.5;
const AMPLITUDE: f64 = 0.5;

/// Cyclic palette of three cosine ramps, each channel a third of a cycle apart.
#[must_use]
pub fn smooth(t: f64) -> Colour {
    let t = clamp_unit(t);
    let channel = |phase: f64| MIDPOINT + AMPLITUDE * (TAU * (t + phase)).cos();

    Colour::from_unit(channel(0.0), channel(1.0 / 3.0), channel(2.0 / 3.0))
}
