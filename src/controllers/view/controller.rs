use crate::core::data::view::{MAX_ITERATIONS, MIN_ITERATIONS, View};
use crate::input::terminal::key::Key;

pub const PAN_FRACTION: f64 = 0.05;
pub const ZOOM_FACTOR: f64 = 0.85;
pub const ITERATION_GROWTH: f64 = 1.02;
pub const ZOOM_OUT_ITERATION_FLOOR: u32 = 50;
pub const ITERATION_STEP: u32 = 10;
pub const STEP_DOWN_ITERATION_FLOOR: u32 = 20;
pub const STEP_UP_ITERATION_CAP: u32 = 5000;

/// What a key did to the view, or what the caller should do next.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlEffect {
    Updated,
    ModeToggled,
    Reset,
    Quit,
    ExportRequested,
    RecordRequested,
    Ignored,
}

/// Applies one key to the view.
///
/// Export and recording are side effects the caller owns; this only reports
/// that they were asked for.
pub fn apply_key(view: &mut View, key: Key) -> ControlEffect {
    let step = view.scale * PAN_FRACTION;

    match key {
        Key::Left => view.cx -= step,
        Key::Right => view.cx += step,
        Key::Up => view.cy += step,
        Key::Down => view.cy -= step,
        Key::Esc => return ControlEffect::Quit,
        Key::Char(c) => return apply_char(view, c),
    }

    ControlEffect::Updated
}

fn apply_char(view: &mut View, c: char) -> ControlEffect {
    match c {
        '=' => {
            view.zoom(ZOOM_FACTOR);
            view.scale_max_iter(ITERATION_GROWTH);
        }
        '-' => {
            view.set_scale(view.scale / ZOOM_FACTOR);
            let shrunk = (f64::from(view.max_iter) / ITERATION_GROWTH).round() as u32;
            view.set_max_iter(shrunk.max(ZOOM_OUT_ITERATION_FLOOR));
        }
        '[' => {
            let lowered = view.max_iter.saturating_sub(ITERATION_STEP);
            view.set_max_iter(lowered.max(STEP_DOWN_ITERATION_FLOOR));
        }
        ']' => {
            let raised = view.max_iter.saturating_add(ITERATION_STEP);
            view.set_max_iter(raised.min(STEP_UP_ITERATION_CAP));
        }
        'p' | 'P' => view.next_palette(),
        'j' | 'J' => {
            view.toggle_julia();
            return ControlEffect::ModeToggled;
        }
        '0' => {
            view.reset();
            return ControlEffect::Reset;
        }
        'q' | 'Q' => return ControlEffect::Quit,
        's' | 'S' => return ControlEffect::ExportRequested,
        'r' | 'R' => return ControlEffect::RecordRequested,
        _ => return ControlEffect::Ignored,
    }

    debug_assert!((MIN_ITERATIONS..=MAX_ITERATIONS).contains(&view.max_iter));
    ControlEffect::Updated
}
