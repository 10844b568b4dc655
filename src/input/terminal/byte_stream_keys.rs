use crate::input::terminal::decoder::KeyDecoder;
use crate::input::terminal::key::{Key, KeySource};
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Keys decoded from a raw byte stream such as a raw-mode stdin.
///
/// A reader thread forwards bytes over a channel so reads can time out;
/// escape sequences are resolved once no further byte arrives within the
/// escape window.
pub struct ByteStreamKeySource {
    bytes: Receiver<u8>,
    decoder: KeyDecoder,
    escape_window: Duration,
}

impl ByteStreamKeySource {
    pub fn new(bytes: Receiver<u8>, escape_window: Duration) -> Self {
        Self {
            bytes,
            decoder: KeyDecoder::new(),
            escape_window,
        }
    }

    /// Spawns a thread that reads `reader` until EOF and feeds this source.
    pub fn from_reader<R: Read + Send + 'static>(mut reader: R, escape_window: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut chunk = [0u8; 64];
            loop {
                match reader.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(read) => {
                        for &byte in &chunk[..read] {
                            if sender.send(byte).is_err() {
                                return;
                            }
                        }
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        debug!(error = %err, "key reader stopped");
                        break;
                    }
                }
            }
        });

        Self::new(receiver, escape_window)
    }

    pub fn stdin(escape_window: Duration) -> Self {
        Self::from_reader(io::stdin(), escape_window)
    }
}

impl KeySource for ByteStreamKeySource {
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        let deadline = Instant::now() + timeout;

        loop {
            let wait = if self.decoder.is_pending() {
                self.escape_window
            } else {
                deadline.saturating_duration_since(Instant::now())
            };

            match self.bytes.recv_timeout(wait) {
                Ok(byte) => {
                    if let Some(key) = self.decoder.feed(byte) {
                        return Ok(Some(key));
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if !self.decoder.is_pending() {
                        return Ok(None);
                    }
                    if let Some(key) = self.decoder.flush() {
                        return Ok(Some(key));
                    }
                    if Instant::now() >= deadline {
                        return Ok(None);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    if let Some(key) = self.decoder.flush() {
                        return Ok(Some(key));
                    }
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "key input closed",
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc::Sender;

    const WINDOW: Duration = Duration::from_millis(25);

    fn channel_source() -> (Sender<u8>, ByteStreamKeySource) {
        let (sender, receiver) = mpsc::channel();
        (sender, ByteStreamKeySource::new(receiver, WINDOW))
    }

    #[test]
    fn times_out_without_input() {
        let (_sender, mut source) = channel_source();

        let start = Instant::now();
        assert_eq!(source.read_key(Duration::from_millis(10)).unwrap(), None);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn decodes_buffered_sequence() {
        let (sender, mut source) = channel_source();
        for &byte in b"\x1b[Dz" {
            sender.send(byte).unwrap();
        }

        assert_eq!(source.read_key(Duration::ZERO).unwrap(), Some(Key::Left));
        assert_eq!(source.read_key(Duration::ZERO).unwrap(), Some(Key::Char('z')));
    }

    #[test]
    fn lone_escape_resolves_after_window() {
        let (sender, mut source) = channel_source();
        sender.send(0x1b).unwrap();

        let start = Instant::now();
        assert_eq!(source.read_key(Duration::from_millis(10)).unwrap(), Some(Key::Esc));
        assert!(start.elapsed() >= WINDOW);
    }

    #[test]
    fn closed_stream_is_end_of_file() {
        let (sender, mut source) = channel_source();
        drop(sender);

        let err = source.read_key(Duration::from_millis(10)).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn reader_thread_forwards_bytes() {
        let mut source =
            ByteStreamKeySource::from_reader(Cursor::new(b"j\x1bOB".to_vec()), WINDOW);

        assert_eq!(
            source.read_key(Duration::from_secs(1)).unwrap(),
            Some(Key::Char('j'))
        );
        assert_eq!(source.read_key(Duration::from_secs(1)).unwrap(), Some(Key::Down));
        assert_eq!(
            source.read_key(Duration::from_secs(1)).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}
