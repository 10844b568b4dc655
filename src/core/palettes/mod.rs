//! Palette table: total functions from a normalized escape value to a colour.
//!
//! Every palette clamps its input to `[0, 1]` before evaluating, so callers
//! may pass any finite or infinite `t`.

pub mod colour_map;
pub mod fire;
pub mod ice;
pub mod kinds;
pub mod smooth;

pub(crate) fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
