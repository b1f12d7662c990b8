use crate::timeline::aggregator::Snapshot;
use std::error::Error;

pub const NO_DATA_MESSAGE: &str = "Waiting for predictions...";

/// Presentation sink for timeline snapshots.
pub trait DeviceDisplay: Send {
    /// Show `snapshot`. An empty timeline must be shown as "no data yet"
    /// rather than as zero series.
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Box<dyn Error + Send + Sync>>;
}
