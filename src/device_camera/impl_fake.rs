use crate::device_camera::encode::encode_jpeg;
use crate::device_camera::interface::{DeviceCamera, EncodedFrame};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgb, RgbImage};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Synthesizes a shifting test pattern. The first `warmup_captures` calls
/// yield no frame, like a webcam that is not streaming yet.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    warmup_captures: u64,
    width: u32,
    height: u32,
    captures: AtomicU64,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, warmup_captures: u64) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            warmup_captures,
            width: 64,
            height: 48,
            captures: AtomicU64::new(0),
        }
    }

    fn pattern(&self, capture: u64) -> DynamicImage {
        let shade = ((capture * 37) % 256) as u8;
        let (width, height) = (self.width, self.height);
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                shade,
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
            ])
        }))
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture_frame(&self) -> Result<Option<EncodedFrame>, Box<dyn std::error::Error + Send + Sync>> {
        let capture = self.captures.fetch_add(1, Ordering::SeqCst);

        if capture < self.warmup_captures {
            self.logger.info("Camera warming up, no frame yet")?;
            return Ok(None);
        }

        let bytes = encode_jpeg(&self.pattern(capture))?;
        Ok(Some(EncodedFrame::jpeg(bytes)))
    }
}
