pub mod byte_stream_keys;
pub mod crossterm_keys;
pub mod decoder;
pub mod key;
pub mod session;
pub mod size;

use crate::input::terminal::key::KeySource;
use std::time::Duration;

/// The key source for the current platform.
#[must_use]
pub fn default_key_source(escape_window: Duration) -> Box<dyn KeySource> {
    #[cfg(unix)]
    {
        Box::new(byte_stream_keys::ByteStreamKeySource::stdin(escape_window))
    }

    #[cfg(not(unix))]
    {
        let _ = escape_window;
        Box::new(crossterm_keys::CrosstermKeySource::new())
    }
}
