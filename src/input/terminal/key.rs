use std::io;
use std::time::Duration;

/// A decoded key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Esc,
}

/// Ctrl-C as delivered by a terminal in raw mode.
pub const INTERRUPT: Key = Key::Char('\u{3}');

/// A platform source of key presses.
pub trait KeySource {
    /// Waits at most `timeout` for a key; `Ok(None)` means nothing arrived.
    ///
    /// Implementations may overrun `timeout` by a short escape-disambiguation
    /// window when a sequence is partially received.
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
}

impl<K: KeySource + ?Sized> KeySource for Box<K> {
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        (**self).read_key(timeout)
    }
}
