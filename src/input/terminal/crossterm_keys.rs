use crate::input::terminal::key::{INTERRUPT, Key, KeySource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Keys read through crossterm's console event API; used where stdin is not a byte stream.
#[derive(Debug, Default)]
pub struct CrosstermKeySource {}

impl CrosstermKeySource {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Maps a console key event onto a [`Key`]; releases and unmapped keys yield `None`.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(INTERRUPT),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Esc),
        _ => None,
    }
}

impl KeySource for CrosstermKeySource {
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_escape() {
        assert_eq!(map_key_event(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key_event(press(KeyCode::Down)), Some(Key::Down));
        assert_eq!(map_key_event(press(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key_event(press(KeyCode::Right)), Some(Key::Right));
        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(Key::Esc));
    }

    #[test]
    fn characters_pass_through() {
        assert_eq!(map_key_event(press(KeyCode::Char('='))), Some(Key::Char('=')));
    }

    #[test]
    fn ctrl_c_is_an_interrupt() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(map_key_event(event), Some(INTERRUPT));
    }

    #[test]
    fn releases_are_ignored() {
        let event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        assert_eq!(map_key_event(event), None);
        assert_eq!(map_key_event(press(KeyCode::F(1))), None);
    }
}
