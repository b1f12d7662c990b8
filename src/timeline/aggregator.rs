use crate::timeline::latest::LatestState;
use crate::timeline::row::{ClassificationResult, Row};
use crate::timeline::window::Timeline;
use serde::Serialize;

/// Read-only view handed to presentation sinks.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Snapshot {
    pub timeline: Vec<Row>,
    pub latest: LatestState,
}

/// Owns the timeline and the latest state. The event loop is its only
/// writer, so each `ingest` is one atomic read-modify-append.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregator {
    timeline: Timeline,
    latest: LatestState,
    revision: u64,
}

impl Aggregator {
    pub fn new(window: usize) -> Self {
        Self {
            timeline: Timeline::new(window),
            latest: LatestState::Pending,
            revision: 0,
        }
    }

    pub fn ingest(&mut self, result: &ClassificationResult) -> Row {
        let row = self.timeline.ingest(result);
        self.latest = LatestState::Classified {
            label: result.label,
            confidence: result.confidence,
        };
        self.revision += 1;
        row
    }

    /// Failures only touch the latest state; the timeline is left as is.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.latest = LatestState::Failed {
            error: message.into(),
        };
        self.revision += 1;
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[allow(dead_code)]
    pub fn latest(&self) -> &LatestState {
        &self.latest
    }

    /// Bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            timeline: self.timeline.snapshot(),
            latest: self.latest.clone(),
        }
    }
}
