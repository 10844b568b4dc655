use crate::presenters::terminal::ansi;
use crate::presenters::terminal::frame::Frame;
use std::io::{self, Write};

/// Draws frames, the status line and an optional notice to a terminal stream.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
        self.out.flush()
    }

    /// Redraws from the home position without clearing, then erases anything left below.
    pub fn draw(&mut self, frame: &Frame, status: &str, notice: Option<&str>) -> io::Result<()> {
        let mut text = String::from(ansi::CURSOR_HOME);
        text.push_str(&frame.to_ansi());
        text.push_str(ansi::LINE_BREAK);
        text.push_str(status);

        if let Some(notice) = notice {
            text.push_str(ansi::LINE_BREAK);
            text.push_str(notice);
        }

        text.push_str(ansi::ERASE_BELOW);

        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.out
    }
}
