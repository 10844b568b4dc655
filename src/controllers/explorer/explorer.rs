use crate::config::ExplorerConfig;
use crate::controllers::explorer::throttle::FrameThrottle;
use crate::controllers::export::errors::ExportError;
use crate::controllers::export::export::export_snapshot;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::recording::recorder::{Recorder, RecordingEvent, TriggerOutcome};
use crate::controllers::view::controller::{ControlEffect, apply_key};
use crate::controllers::view::shared_view::SharedView;
use crate::core::actions::render_view::render_view::{RenderError, render_view};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::input::terminal::key::{INTERRUPT, Key, KeySource};
use crate::input::terminal::size::{SizeProbe, effective_size};
use crate::presenters::terminal::frame::Frame;
use crate::presenters::terminal::presenter::TerminalPresenter;
use crate::presenters::terminal::status_line::status_line;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum ExplorerError {
    Io(io::Error),
    Grid(PixelRectError),
    Render(RenderError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal I/O failed: {}", err),
            Self::Grid(err) => write!(f, "invalid terminal grid: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Grid(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExplorerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PixelRectError> for ExplorerError {
    fn from(err: PixelRectError) -> Self {
        Self::Grid(err)
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
    /// Ctrl-C or a closed input stream.
    Interrupted,
}

/// The interactive session: polls keys, applies them to the shared view and redraws.
pub struct Explorer<K, W, P, S>
where
    K: KeySource,
    W: Write,
    P: FilePresenterPort + 'static,
    S: SizeProbe,
{
    config: ExplorerConfig,
    view: SharedView,
    keys: K,
    screen: TerminalPresenter<W>,
    file_presenter: Arc<P>,
    recorder: Recorder<P>,
    recording_events: Receiver<RecordingEvent>,
    size_probe: S,
    grid: (u16, u16),
    throttle: FrameThrottle,
    notice: Option<String>,
    needs_clear: bool,
}

impl<K, W, P, S> Explorer<K, W, P, S>
where
    K: KeySource,
    W: Write,
    P: FilePresenterPort + 'static,
    S: SizeProbe,
{
    pub fn new(
        config: ExplorerConfig,
        keys: K,
        out: W,
        file_presenter: Arc<P>,
        size_probe: S,
    ) -> Self {
        let (recorder, recording_events) = Recorder::new(
            Arc::clone(&file_presenter),
            config.recording,
            config.output_dir.clone(),
        );
        let grid = effective_size(size_probe.size(), &config.grid);
        let throttle = FrameThrottle::new(config.frame_interval());

        Self {
            config,
            view: SharedView::default(),
            keys,
            screen: TerminalPresenter::new(out),
            file_presenter,
            recorder,
            recording_events,
            size_probe,
            grid,
            throttle,
            notice: None,
            needs_clear: false,
        }
    }

    #[must_use]
    pub fn view(&self) -> &SharedView {
        &self.view
    }

    #[must_use]
    pub fn grid(&self) -> (u16, u16) {
        self.grid
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn recorder(&self) -> &Recorder<P> {
        &self.recorder
    }

    #[must_use]
    pub fn screen(&self) -> &TerminalPresenter<W> {
        &self.screen
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        let (cols, rows) = self.grid;
        PixelRect::for_terminal(cols, rows)
    }

    pub fn run(&mut self) -> Result<StepOutcome, ExplorerError> {
        info!(cols = self.grid.0, rows = self.grid.1, "explorer started");

        loop {
            match self.step()? {
                StepOutcome::Continue => {}
                outcome => {
                    info!(?outcome, "explorer stopped");
                    return Ok(outcome);
                }
            }
        }
    }

    /// One loop iteration: collect worker news, draw if due, handle at most one key, track resizes.
    pub fn step(&mut self) -> Result<StepOutcome, ExplorerError> {
        self.drain_recording_events();

        let now = Instant::now();
        if self.throttle.is_due(now) {
            self.draw()?;
            self.throttle.mark_drawn(now);
        }

        let outcome = match self.keys.read_key(self.config.key_poll_timeout) {
            Ok(Some(key)) => self.handle_key(key)?,
            Ok(None) => StepOutcome::Continue,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                warn!("key input closed");
                StepOutcome::Interrupted
            }
            Err(err) => return Err(err.into()),
        };

        self.track_resize();

        Ok(outcome)
    }

    /// Renders the current view snapshot and writes it with the status and any pending notice.
    pub fn draw(&mut self) -> Result<(), ExplorerError> {
        if self.needs_clear {
            self.screen.clear()?;
            self.needs_clear = false;
        }

        let snapshot = self.view.snapshot();
        let buffer = render_view(&snapshot, self.pixel_rect()?)?;
        let frame = Frame::from_pixel_buffer(&buffer);
        let notice = self.notice.take();

        self.screen
            .draw(&frame, &status_line(&snapshot), notice.as_deref())?;

        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) -> Result<StepOutcome, ExplorerError> {
        if key == INTERRUPT {
            info!("interrupted");
            return Ok(StepOutcome::Interrupted);
        }

        let (effect, snapshot) = self.view.update(|view| (apply_key(view, key), *view));
        debug!(?key, ?effect, "key handled");

        match effect {
            ControlEffect::Quit => return Ok(StepOutcome::Quit),
            ControlEffect::ModeToggled => {
                self.notice = Some(format!("Toggled to {}", snapshot.fractal_kind()));
            }
            ControlEffect::Reset => self.notice = Some("View reset".to_string()),
            ControlEffect::ExportRequested => self.export()?,
            ControlEffect::RecordRequested => self.start_recording()?,
            ControlEffect::Updated | ControlEffect::Ignored => {}
        }

        Ok(StepOutcome::Continue)
    }

    fn export(&mut self) -> Result<(), ExplorerError> {
        let snapshot = self.view.snapshot();
        let pixel_rect = self.pixel_rect()?;
        let result = export_snapshot(
            &*self.file_presenter,
            &snapshot,
            pixel_rect,
            &self.config.output_dir,
        );

        self.notice = Some(match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(ExportError::CapabilityMissing) => ExportError::CapabilityMissing.to_string(),
            Err(err) => {
                warn!(error = %err, "export failed");
                format!("Export failed: {}", err)
            }
        });

        Ok(())
    }

    fn start_recording(&mut self) -> Result<(), ExplorerError> {
        let pixel_rect = self.pixel_rect()?;

        self.notice = Some(match self.recorder.trigger(&self.view, pixel_rect) {
            // The worker runs detached; completion arrives as a RecordingEvent.
            TriggerOutcome::Started(_) => {
                format!("Recording {} frames...", self.recorder.settings().frames)
            }
            TriggerOutcome::AlreadyRecording => "Already recording".to_string(),
            TriggerOutcome::CapabilityMissing => ExportError::CapabilityMissing.to_string(),
        });

        Ok(())
    }

    fn drain_recording_events(&mut self) {
        while let Ok(event) = self.recording_events.try_recv() {
            match event {
                RecordingEvent::FrameWritten { index, path } => {
                    debug!(index, path = %path.display(), "recording frame written");
                }
                RecordingEvent::FrameFailed { index, message } => {
                    self.notice = Some(format!("Recording frame {} failed: {}", index, message));
                }
                RecordingEvent::Finished { frames_written, total } => {
                    self.notice = Some(if frames_written == total {
                        format!("Recorded {} PNG frames (fractal_rec_###.png)", total)
                    } else {
                        format!(
                            "Recorded {} of {} PNG frames (fractal_rec_###.png)",
                            frames_written, total
                        )
                    });
                }
            }
        }
    }

    fn track_resize(&mut self) {
        let grid = effective_size(self.size_probe.size(), &self.config.grid);

        if grid != self.grid {
            debug!(cols = grid.0, rows = grid.1, "terminal resized");
            self.grid = grid;
            self.needs_clear = true;
        }
    }
}
