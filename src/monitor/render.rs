use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::monitor::core::Model;
use std::sync::{Arc, Mutex};

/// Pushes snapshots to the display, skipping models whose timeline and
/// latest state have not changed since the last render.
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
    logger: Arc<dyn Logger + Send + Sync>,
    last_revision: Option<u64>,
}

impl Render {
    pub fn new(
        device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            device_display,
            logger: logger.with_namespace("render"),
            last_revision: None,
        }
    }

    pub fn render(&mut self, model: &Model) {
        let revision = model.aggregator.revision();
        if self.last_revision == Some(revision) {
            return;
        }

        match self.draw(model) {
            Ok(()) => self.last_revision = Some(revision),
            Err(e) => {
                let _ = self.logger.error(&format!("Render failed: {}", e));
            }
        }
    }

    fn draw(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;
        device_display.render(&model.aggregator.snapshot())
    }
}
