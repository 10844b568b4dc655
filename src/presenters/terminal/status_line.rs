use crate::core::data::view::View;

pub const KEY_HELP: &str = "[Arrows] move  [=/-] zoom  [[]/]] iters  j toggle  p palette  s save  r record  0 reset  q quit";

#[must_use]
pub fn status_line(view: &View) -> String {
    format!(
        "Mode: {} | Iter: {} | Center: ({:.6}, {:.6}) | Scale: {:.6} | Palette: {} | {}",
        view.fractal_kind(),
        view.max_iter,
        view.cx,
        view.cy,
        view.scale,
        view.palette(),
        KEY_HELP
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_status() {
        assert_eq!(
            status_line(&View::default()),
            "Mode: Mandelbrot | Iter: 200 | Center: (-0.500000, 0.000000) | Scale: 3.000000 | \
             Palette: smooth | [Arrows] move  [=/-] zoom  [[]/]] iters  j toggle  p palette  \
             s save  r record  0 reset  q quit"
        );
    }

    #[test]
    fn julia_mode_and_palette_are_named() {
        let view = View {
            julia_mode: true,
            palette_idx: 1,
            cx: 0.25,
            cy: -0.125,
            scale: 0.00125,
            ..View::default()
        };

        let line = status_line(&view);

        assert!(line.starts_with("Mode: Julia | Iter: 200 | Center: (0.250000, -0.125000) | Scale: 0.001250 | Palette: fire | "));
    }
}
