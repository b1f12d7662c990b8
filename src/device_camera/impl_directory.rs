use crate::device_camera::encode::{encode_jpeg, fit_within};
use crate::device_camera::interface::{DeviceCamera, EncodedFrame};
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub struct DirectoryCameraConfig {
    pub directory: PathBuf,
    pub mirror: bool,
    pub max_width: u32,
    pub max_height: u32,
}

impl DirectoryCameraConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            mirror: true,
            max_width: 640,
            max_height: 480,
        }
    }
}

/// Replays still images from a directory in file name order, looping.
/// Files are listed on every capture so images can be dropped in while
/// the monitor runs.
pub struct DeviceCameraDirectory {
    logger: Arc<dyn Logger + Send + Sync>,
    config: DirectoryCameraConfig,
    next_index: AtomicUsize,
}

impl DeviceCameraDirectory {
    pub fn new(config: DirectoryCameraConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("directory"),
            config,
            next_index: AtomicUsize::new(0),
        }
    }

    fn list_images(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut images: Vec<PathBuf> = std::fs::read_dir(&self.config.directory)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        images.sort();
        Ok(images)
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

impl DeviceCamera for DeviceCameraDirectory {
    fn capture_frame(&self) -> Result<Option<EncodedFrame>, Box<dyn std::error::Error + Send + Sync>> {
        let images = self.list_images()?;
        if images.is_empty() {
            return Ok(None);
        }

        let index = self.next_index.fetch_add(1, Ordering::SeqCst) % images.len();
        let path = &images[index];
        self.logger
            .info(&format!("Capturing frame from {}", path.display()))?;

        let mut image = image::open(path)?;
        if self.config.mirror {
            image = image.fliph();
        }
        let image = fit_within(image, self.config.max_width, self.config.max_height);

        Ok(Some(EncodedFrame::jpeg(encode_jpeg(&image)?)))
    }
}
