use std::path::PathBuf;
use std::time::Duration;

use crate::library::clock::Timezone;
use crate::timeline::window::DEFAULT_WINDOW;

#[derive(Debug, Clone, PartialEq)]
pub enum CameraSource {
    /// Synthetic frames, no frame for the first `warmup_captures` ticks.
    Fake { warmup_captures: u64 },
    Directory { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    Http,
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Console,
    Json,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub classifier_endpoint: String,
    pub classifier_timeout: Duration,
    pub classifier: ClassifierBackend,
    pub camera: CameraSource,
    pub mirror_frames: bool,
    pub display: DisplayMode,
    pub timeline_window: usize,
    /// `chrono` format string for row time labels.
    pub time_format: String,
    pub timezone: Timezone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_secs(1),
            classifier_endpoint: "http://127.0.0.1:5000/predict".to_string(),
            classifier_timeout: Duration::from_secs(5),
            classifier: ClassifierBackend::Http,
            camera: CameraSource::Fake { warmup_captures: 2 },
            mirror_frames: true,
            display: DisplayMode::Console,
            timeline_window: DEFAULT_WINDOW,
            time_format: "%H:%M:%S".to_string(),
            timezone: Timezone::Local,
        }
    }
}

impl Config {
    /// Current time in `timezone`, rendered with `time_format`.
    pub fn format_now(&self) -> String {
        self.timezone.format_now(&self.time_format)
    }
}
