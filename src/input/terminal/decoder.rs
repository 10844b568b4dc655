//! Byte-level key decoder.
//!
//! Recognizes the arrow encodings terminals actually send (`ESC [ A`,
//! application-mode `ESC O A`, and modified `ESC [ 1 ; 5 A`), UTF-8
//! characters, and plain bytes. Anything else that starts with ESC decodes
//! to [`Key::Esc`].

use crate::input::terminal::key::Key;

const ESC: u8 = 0x1b;

/// Longest CSI parameter run kept before the sequence is abandoned.
const MAX_CSI_PARAMS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DecoderState {
    #[default]
    Ground,
    /// After a lone ESC.
    Escape,
    /// After `ESC [`, collecting parameter and intermediate bytes.
    Csi { params: Vec<u8> },
    /// Inside a CSI sequence too long to keep; bytes are skipped until its final byte.
    CsiOverflow,
    /// After `ESC O`.
    Ss3,
    Utf8 { bytes: [u8; 4], collected: usize, expected: usize },
}

#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecoderState,
}

fn arrow(final_byte: u8) -> Option<Key> {
    match final_byte {
        b'A' => Some(Key::Up),
        b'B' => Some(Key::Down),
        b'C' => Some(Key::Right),
        b'D' => Some(Key::Left),
        _ => None,
    }
}

/// `ESC [ A` or `ESC [ 1 ; <modifiers> A`.
fn is_arrow_params(params: &[u8]) -> bool {
    match params {
        [] => true,
        [b'1', b';', modifiers @ ..] => {
            !modifiers.is_empty() && modifiers.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

fn utf8_length(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a partial sequence is buffered.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state != DecoderState::Ground
    }

    /// Feeds one byte, returning a key once a sequence is complete.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match std::mem::take(&mut self.state) {
            DecoderState::Ground => self.ground(byte),
            DecoderState::Escape => match byte {
                b'[' => {
                    self.state = DecoderState::Csi { params: Vec::new() };
                    None
                }
                b'O' => {
                    self.state = DecoderState::Ss3;
                    None
                }
                ESC => {
                    self.state = DecoderState::Escape;
                    Some(Key::Esc)
                }
                _ => Some(Key::Esc),
            },
            DecoderState::Csi { mut params } => match byte {
                0x20..=0x3F if params.len() < MAX_CSI_PARAMS => {
                    params.push(byte);
                    self.state = DecoderState::Csi { params };
                    None
                }
                0x20..=0x3F => {
                    self.state = DecoderState::CsiOverflow;
                    None
                }
                0x40..=0x7E if is_arrow_params(&params) => {
                    Some(arrow(byte).unwrap_or(Key::Esc))
                }
                _ => Some(Key::Esc),
            },
            DecoderState::CsiOverflow => match byte {
                0x20..=0x3F => {
                    self.state = DecoderState::CsiOverflow;
                    None
                }
                _ => Some(Key::Esc),
            },
            DecoderState::Ss3 => Some(arrow(byte).unwrap_or(Key::Esc)),
            DecoderState::Utf8 {
                mut bytes,
                collected,
                expected,
            } => {
                if byte & 0xC0 != 0x80 {
                    // Truncated sequence: drop it and start over with this byte.
                    return self.ground(byte);
                }

                bytes[collected] = byte;
                let collected = collected + 1;

                if collected < expected {
                    self.state = DecoderState::Utf8 {
                        bytes,
                        collected,
                        expected,
                    };
                    return None;
                }

                std::str::from_utf8(&bytes[..expected])
                    .ok()
                    .and_then(|text| text.chars().next())
                    .map(Key::Char)
            }
        }
    }

    /// Resolves whatever is buffered after the escape window expires.
    ///
    /// An unfinished escape sequence becomes [`Key::Esc`]; a truncated UTF-8
    /// character is dropped.
    pub fn flush(&mut self) -> Option<Key> {
        match std::mem::take(&mut self.state) {
            DecoderState::Ground | DecoderState::Utf8 { .. } => None,
            DecoderState::Escape
            | DecoderState::Csi { .. }
            | DecoderState::CsiOverflow
            | DecoderState::Ss3 => {
                Some(Key::Esc)
            }
        }
    }

    fn ground(&mut self, byte: u8) -> Option<Key> {
        if byte == ESC {
            self.state = DecoderState::Escape;
            return None;
        }

        if byte.is_ascii() {
            return Some(Key::Char(char::from(byte)));
        }

        if let Some(expected) = utf8_length(byte) {
            let mut bytes = [0; 4];
            bytes[0] = byte;
            self.state = DecoderState::Utf8 {
                bytes,
                collected: 1,
                expected,
            };
        }

        None
    }
}
