use clap::Parser;
use cli::Args;
use config::{CameraSource, ClassifierBackend, Config, DisplayMode};
use device_camera::impl_directory::{DeviceCameraDirectory, DirectoryCameraConfig};
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::{run_window, DeviceDisplayGui, MonitorFinished, SharedSnapshot};
use device_display::impl_json::DeviceDisplayJson;
use device_display::interface::DeviceDisplay;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_http::ImageClassifierHttp;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use monitor::main::Monitor;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

mod cli;
mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod library;
mod monitor;
mod timeline;

type AppResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn main() -> AppResult {
    let config = Args::parse().into_config();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.timezone));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match &config.camera {
        CameraSource::Fake { warmup_captures } => {
            Arc::new(DeviceCameraFake::new(logger.clone(), *warmup_captures))
        }
        CameraSource::Directory { path } => {
            let mut camera_config = DirectoryCameraConfig::new(path.clone());
            camera_config.mirror = config.mirror_frames;
            Arc::new(DeviceCameraDirectory::new(camera_config, logger.clone()))
        }
    };

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = match config.classifier {
        ClassifierBackend::Http => Arc::new(ImageClassifierHttp::new(
            config.classifier_endpoint.clone(),
            config.classifier_timeout,
            logger.clone(),
        )),
        ClassifierBackend::Fake => Arc::new(ImageClassifierFake::new(logger.clone())),
    };

    let _ = logger.info(&format!("Starting with {:?}", config));

    match config.display {
        DisplayMode::Console => run_headless(
            config,
            logger,
            device_camera,
            image_classifier,
            Arc::new(Mutex::new(DeviceDisplayConsole::new(std::io::stdout()))),
        ),
        DisplayMode::Json => run_headless(
            config,
            logger,
            device_camera,
            image_classifier,
            Arc::new(Mutex::new(DeviceDisplayJson::new(std::io::stdout()))),
        ),
        DisplayMode::Gui => run_gui(config, logger, device_camera, image_classifier),
    }
}

/// Runs the monitor on the main thread until Ctrl-C.
fn run_headless(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
) -> AppResult {
    let monitor = Monitor::new(
        config,
        logger,
        device_camera,
        device_display,
        image_classifier,
    );

    let stop = monitor.stop_handle();
    ctrlc::set_handler(move || stop.stop())?;

    monitor.run()?;
    Ok(())
}

/// The window must own the main thread, so the monitor runs on a worker.
/// Closing the window stops the monitor, and a monitor stopped by Ctrl-C
/// closes the window.
fn run_gui(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
) -> AppResult {
    let shared = SharedSnapshot::default();
    let finished = MonitorFinished::default();

    let monitor = Monitor::new(
        config,
        logger,
        device_camera,
        Arc::new(Mutex::new(DeviceDisplayGui::new(shared.clone()))),
        image_classifier,
    );

    let stop = monitor.stop_handle();
    let ctrlc_stop = stop.clone();
    ctrlc::set_handler(move || ctrlc_stop.stop())?;

    let worker_finished = finished.clone();
    let worker = std::thread::spawn(move || {
        let result = monitor.run();
        worker_finished.store(true, Ordering::SeqCst);
        result
    });

    let window_result = run_window(shared, finished);
    stop.stop();

    worker.join().map_err(|_| "monitor thread panicked")??;
    window_result
}
