use crate::config::{CameraSource, ClassifierBackend, Config, DisplayMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CameraArg {
    Fake,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierArg {
    Http,
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayArg {
    Console,
    Json,
    Gui,
}

/// Samples frames, classifies them and charts emotion confidence over time.
#[derive(Debug, Parser)]
#[command(name = "emotion-monitor", version)]
pub struct Args {
    /// Classification endpoint receiving `{"image": <data url>}`.
    #[arg(long, env = "EMOTION_MONITOR_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Sampling period in milliseconds.
    #[arg(
        long,
        env = "EMOTION_MONITOR_TICK_MS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: Option<u64>,

    /// Per-request classifier timeout in milliseconds.
    #[arg(
        long,
        env = "EMOTION_MONITOR_TIMEOUT_MS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: Option<u64>,

    /// Number of rows kept in the timeline.
    #[arg(long)]
    pub window: Option<usize>,

    #[arg(long, value_enum, default_value_t = CameraArg::Fake)]
    pub camera: CameraArg,

    /// Directory of still images replayed by `--camera directory`.
    #[arg(long, required_if_eq("camera", "directory"))]
    pub frames_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ClassifierArg::Http)]
    pub classifier: ClassifierArg,

    #[arg(long, value_enum, default_value_t = DisplayArg::Console)]
    pub display: DisplayArg,

    /// Send frames unmirrored.
    #[arg(long)]
    pub no_mirror: bool,

    /// `chrono` format string for timeline labels.
    #[arg(long)]
    pub time_format: Option<String>,
}

impl Args {
    pub fn into_config(self) -> Config {
        let mut config = Config::default();

        if let Some(endpoint) = self.endpoint {
            config.classifier_endpoint = endpoint;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_rate = Duration::from_millis(tick_ms);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.classifier_timeout = Duration::from_millis(timeout_ms);
        }
        if let Some(window) = self.window {
            config.timeline_window = window;
        }
        if let Some(time_format) = self.time_format {
            config.time_format = time_format;
        }

        if let (CameraArg::Directory, Some(path)) = (self.camera, self.frames_dir) {
            config.camera = CameraSource::Directory { path };
        }
        config.classifier = match self.classifier {
            ClassifierArg::Http => ClassifierBackend::Http,
            ClassifierArg::Fake => ClassifierBackend::Fake,
        };
        config.display = match self.display {
            DisplayArg::Console => DisplayMode::Console,
            DisplayArg::Json => DisplayMode::Json,
            DisplayArg::Gui => DisplayMode::Gui,
        };
        config.mirror_frames = !self.no_mirror;

        config
    }
}
