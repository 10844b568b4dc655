use crate::config::RecordingSettings;
use crate::controllers::export::export::{recording_filename, write_frame};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::view::shared_view::SharedView;
use crate::core::data::pixel_rect::PixelRect;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// Progress reported by the recording worker.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordingEvent {
    FrameWritten { index: usize, path: PathBuf },
    FrameFailed { index: usize, message: String },
    Finished { frames_written: usize, total: usize },
}

#[derive(Debug)]
pub enum TriggerOutcome {
    Started(JoinHandle<()>),
    AlreadyRecording,
    CapabilityMissing,
}

/// Clears the active flag when the worker exits, including by panic.
struct ActiveGuard(Arc<AtomicBool>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs at most one zoom recording at a time on a background thread.
///
/// Each step zooms the shared view in place, so the live display follows
/// the recording while it runs.
pub struct Recorder<P: FilePresenterPort + 'static> {
    presenter: Arc<P>,
    settings: RecordingSettings,
    output_dir: PathBuf,
    active: Arc<AtomicBool>,
    frames_written: Arc<AtomicUsize>,
    workers_spawned: AtomicUsize,
    events: Sender<RecordingEvent>,
}

impl<P: FilePresenterPort + 'static> Recorder<P> {
    pub fn new(
        presenter: Arc<P>,
        settings: RecordingSettings,
        output_dir: PathBuf,
    ) -> (Self, Receiver<RecordingEvent>) {
        let (events, receiver) = mpsc::channel();

        let recorder = Self {
            presenter,
            settings,
            output_dir,
            active: Arc::new(AtomicBool::new(false)),
            frames_written: Arc::new(AtomicUsize::new(0)),
            workers_spawned: AtomicUsize::new(0),
            events,
        };

        (recorder, receiver)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Frames successfully written across every recording of this session.
    #[must_use]
    pub fn frames_written(&self) -> usize {
        self.frames_written.load(Ordering::Acquire)
    }

    #[cfg(test)]
    fn workers_spawned(&self) -> usize {
        self.workers_spawned.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn settings(&self) -> RecordingSettings {
        self.settings
    }

    /// Starts a recording of `view` at `pixel_rect` unless one is already running.
    pub fn trigger(&self, view: &SharedView, pixel_rect: PixelRect) -> TriggerOutcome {
        if !self.presenter.is_available() {
            return TriggerOutcome::CapabilityMissing;
        }

        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return TriggerOutcome::AlreadyRecording;
        }

        let guard = ActiveGuard(Arc::clone(&self.active));
        let worker = RecordingWorker {
            base_iterations: view.snapshot().max_iter,
            presenter: Arc::clone(&self.presenter),
            settings: self.settings,
            output_dir: self.output_dir.clone(),
            view: view.clone(),
            pixel_rect,
            frames_written: Arc::clone(&self.frames_written),
            events: self.events.clone(),
        };

        let recording = self.workers_spawned.fetch_add(1, Ordering::AcqRel) + 1;
        info!(recording, frames = self.settings.frames, "recording started");

        TriggerOutcome::Started(thread::spawn(move || {
            let _guard = guard;
            worker.run();
        }))
    }
}

struct RecordingWorker<P: FilePresenterPort> {
    /// `max_iter` as it was when the recording was triggered.
    base_iterations: u32,
    presenter: Arc<P>,
    settings: RecordingSettings,
    output_dir: PathBuf,
    view: SharedView,
    pixel_rect: PixelRect,
    frames_written: Arc<AtomicUsize>,
    events: Sender<RecordingEvent>,
}

impl<P: FilePresenterPort> RecordingWorker<P> {
    fn run(self) {
        let settings = self.settings;
        let mut written = 0;

        for index in 0..settings.frames {
            let snapshot = self.view.update(|view| {
                view.zoom(settings.zoom_factor);
                let grown = (f64::from(view.max_iter) * settings.iteration_growth).round();
                view.set_max_iter((grown as u32).min(settings.iteration_cap));
                *view
            });

            let filename = recording_filename(index);
            let event = match write_frame(
                &*self.presenter,
                &snapshot,
                self.pixel_rect,
                &self.output_dir,
                &filename,
            ) {
                Ok(path) => {
                    written += 1;
                    self.frames_written.fetch_add(1, Ordering::AcqRel);
                    RecordingEvent::FrameWritten { index, path }
                }
                Err(err) => {
                    warn!(index, error = %err, "recording frame failed");
                    RecordingEvent::FrameFailed {
                        index,
                        message: err.to_string(),
                    }
                }
            };

            // Receiver gone means the session is shutting down; keep writing anyway.
            let _ = self.events.send(event);
        }

        self.view.update(|view| view.set_max_iter(self.base_iterations));
        info!(written, total = settings.frames, "recording finished");

        let _ = self.events.send(RecordingEvent::Finished {
            frames_written: written,
            total: settings.frames,
        });
    }
}
