use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palettes::kinds::PaletteKinds;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_SCALE: f64 = 3.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_JULIA_C: Complex = Complex::new(-0.70176, -0.3842);

pub const MIN_ITERATIONS: u32 = 20;
pub const MAX_ITERATIONS: u32 = 8000;

pub const MIN_SCALE: f64 = f64::MIN_POSITIVE;
pub const MAX_SCALE: f64 = 1.0e6;

/// The camera: which slice of the complex plane is visible and how it is coloured.
///
/// All setters keep `scale` strictly positive, `max_iter` inside
/// [`MIN_ITERATIONS`]`..=`[`MAX_ITERATIONS`] and `palette_idx` a valid index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub cx: f64,
    pub cy: f64,
    pub scale: f64,
    pub max_iter: u32,
    pub julia_mode: bool,
    pub julia_c: Complex,
    pub palette_idx: usize,
}

impl Default for View {
    fn default() -> Self {
        Self {
            cx: DEFAULT_CENTER.real,
            cy: DEFAULT_CENTER.imag,
            scale: DEFAULT_SCALE,
            max_iter: DEFAULT_MAX_ITERATIONS,
            julia_mode: false,
            julia_c: DEFAULT_JULIA_C,
            palette_idx: 0,
        }
    }
}

impl View {
    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.cx, self.cy)
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKinds {
        if self.julia_mode {
            FractalKinds::Julia
        } else {
            FractalKinds::Mandelbrot
        }
    }

    #[must_use]
    pub fn palette(&self) -> PaletteKinds {
        PaletteKinds::from_index(self.palette_idx)
    }

    /// Multiplies the visible width by `factor`.
    pub fn zoom(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = if scale.is_nan() {
            DEFAULT_SCALE
        } else {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        };
    }

    pub fn set_max_iter(&mut self, max_iter: u32) {
        self.max_iter = max_iter.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
    }

    /// Scales the iteration cap by `factor`, rounding to the nearest integer.
    pub fn scale_max_iter(&mut self, factor: f64) {
        let scaled = (f64::from(self.max_iter) * factor).round();
        self.set_max_iter(scaled.clamp(0.0, f64::from(u32::MAX)) as u32);
    }

    pub fn next_palette(&mut self) {
        self.palette_idx = (self.palette_idx + 1) % PaletteKinds::ALL.len();
    }

    pub fn toggle_julia(&mut self) {
        self.julia_mode = !self.julia_mode;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_mandelbrot_framing() {
        let view = View::default();

        assert_eq!(view.cx, -0.5);
        assert_eq!(view.cy, 0.0);
        assert_eq!(view.scale, 3.0);
        assert_eq!(view.max_iter, 200);
        assert!(!view.julia_mode);
        assert_eq!(view.julia_c, Complex::new(-0.70176, -0.3842));
        assert_eq!(view.palette_idx, 0);
        assert_eq!(view.fractal_kind(), FractalKinds::Mandelbrot);
        assert_eq!(view.palette(), PaletteKinds::Smooth);
    }

    #[test]
    fn set_max_iter_clamps_to_bounds() {
        let mut view = View::default();

        view.set_max_iter(0);
        assert_eq!(view.max_iter, MIN_ITERATIONS);

        view.set_max_iter(100_000);
        assert_eq!(view.max_iter, MAX_ITERATIONS);
    }

    #[test]
    fn scale_max_iter_rounds() {
        let mut view = View::default();

        view.scale_max_iter(1.02);
        assert_eq!(view.max_iter, 204);

        view.max_iter = 7990;
        view.scale_max_iter(1.03);
        assert_eq!(view.max_iter, MAX_ITERATIONS);
    }

    #[test]
    fn zoom_never_reaches_zero() {
        let mut view = View::default();

        for _ in 0..10_000 {
            view.zoom(0.5);
        }

        assert!(view.scale > 0.0);
        assert_eq!(view.scale, MIN_SCALE);
    }

    #[test]
    fn set_scale_rejects_nan() {
        let mut view = View::default();
        view.set_scale(f64::NAN);

        assert_eq!(view.scale, DEFAULT_SCALE);
    }

    #[test]
    fn next_palette_wraps() {
        let mut view = View::default();

        for _ in 0..PaletteKinds::ALL.len() {
            view.next_palette();
        }

        assert_eq!(view.palette_idx, 0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut view = View {
            cx: 1.0,
            cy: -1.0,
            scale: 0.001,
            max_iter: 900,
            julia_mode: true,
            julia_c: Complex::new(0.3, 0.5),
            palette_idx: 2,
        };

        view.reset();

        assert_eq!(view, View::default());
    }
}
