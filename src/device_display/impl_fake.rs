use crate::device_display::interface::DeviceDisplay;
use crate::timeline::aggregator::Snapshot;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every rendered snapshot.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    rendered: Arc<Mutex<Vec<Snapshot>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Vec<Snapshot> {
        match self.rendered.lock() {
            Ok(rendered) => rendered.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<Snapshot> {
        self.rendered().pop()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.rendered
            .lock()
            .map_err(|e| e.to_string())?
            .push(snapshot.clone());
        Ok(())
    }
}
