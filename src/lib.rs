pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;

pub use config::ExplorerConfig;
pub use controllers::explorer::explorer::{Explorer, ExplorerError, StepOutcome};
pub use input::terminal::default_key_source;
pub use input::terminal::session::TerminalSession;
pub use input::terminal::size::CrosstermSizeProbe;
pub use presenters::file::png::PngFilePresenter;
