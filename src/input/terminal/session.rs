//! Raw-mode lifecycle guard.
//!
//! Entering hides the cursor and clears the screen; dropping restores the
//! terminal. The same restoration runs from a panic hook when the panicking
//! thread entered the session, and on Unix from a signal thread on
//! SIGINT/SIGTERM before exiting with `128 + signal`. Panics on worker threads
//! leave the terminal in raw mode.

use crate::presenters::terminal::ansi;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::thread::{self, ThreadId};
use tracing::info;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Thread that entered the current session, if any.
static SESSION_THREAD: Mutex<Option<ThreadId>> = Mutex::new(None);

fn set_session_thread(owner: Option<ThreadId>) {
    *SESSION_THREAD.lock().unwrap_or_else(PoisonError::into_inner) = owner;
}

fn owns_terminal(thread: ThreadId) -> bool {
    *SESSION_THREAD.lock().unwrap_or_else(PoisonError::into_inner) == Some(thread)
}

#[derive(Debug)]
pub struct TerminalSession {
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        set_session_thread(Some(thread::current().id()));

        crossterm::terminal::enable_raw_mode()?;

        // From here on, an early return drops the session and restores the terminal.
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut session = Self {
            #[cfg(unix)]
            signal_guard: None,
        };

        #[cfg(unix)]
        {
            session.signal_guard = Some(SignalGuard::new()?);
        }

        let mut stdout = io::stdout();
        stdout.write_all(ansi::HIDE_CURSOR.as_bytes())?;
        stdout.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
        stdout.flush()?;

        info!("terminal session entered");

        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        best_effort_cleanup();
        set_session_thread(None);
        info!("terminal session restored");
    }
}

/// Restoration bytes written on every exit path.
#[must_use]
pub fn restore_sequence() -> String {
    format!("{}{}{}", ansi::RESET, ansi::SHOW_CURSOR, ansi::LINE_BREAK)
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if owns_terminal(thread::current().id()) {
                best_effort_cleanup();
            }
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();

    let _ = stdout.write_all(restore_sequence().as_bytes());
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                tracing::warn!(signal, "termination signal received, cleaning up");
                best_effort_cleanup();
                std::process::exit(128 + signal);
            }
        });

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
