use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const LOG_FILE_ENV: &str = "FRACTAL_EXPLORER_LOG";
pub const OUTPUT_DIR_ENV: &str = "FRACTAL_EXPLORER_OUTPUT_DIR";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecordingSettings {
    pub frames: usize,
    pub zoom_factor: f64,
    pub iteration_growth: f64,
    pub iteration_cap: u32,
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            frames: 40,
            zoom_factor: 0.92,
            iteration_growth: 1.03,
            iteration_cap: 8000,
        }
    }
}

/// Terminal grid limits applied to whatever size the terminal reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSettings {
    pub fallback_cols: u16,
    pub fallback_rows: u16,
    pub min_cols: u16,
    pub min_rows: u16,
    /// Rows left free below the fractal for the status and notice lines.
    pub row_margin: u16,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            fallback_cols: 100,
            fallback_rows: 40,
            min_cols: 60,
            min_rows: 12,
            row_margin: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub frame_rate: u32,
    pub key_poll_timeout: Duration,
    pub escape_window: Duration,
    pub grid: GridSettings,
    pub output_dir: PathBuf,
    pub recording: RecordingSettings,
    pub log_file: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            key_poll_timeout: Duration::from_millis(10),
            escape_window: Duration::from_millis(25),
            grid: GridSettings::default(),
            output_dir: PathBuf::from("."),
            recording: RecordingSettings::default(),
            log_file: None,
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Builds the config from an arbitrary variable source; empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            log_file: non_empty(LOG_FILE_ENV).map(PathBuf::from),
            output_dir: non_empty(OUTPUT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir.clone()),
            ..defaults
        }
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
