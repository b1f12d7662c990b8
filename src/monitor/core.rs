use crate::device_camera::interface::EncodedFrame;
use crate::image_classifier::interface::{Classification, ClassifyError};
use crate::timeline::aggregator::Aggregator;
use crate::timeline::row::ClassificationResult;

/// Where the current sampling cycle is. Cycles never overlap: a tick is
/// only acted on while `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Capturing,
    Classifying,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub phase: Phase,
    pub aggregator: Aggregator,
    /// Ticks dropped because a cycle was still in flight.
    pub skipped_ticks: u64,
}

#[derive(Debug)]
pub enum Event {
    Tick,
    FrameCaptureDone(Result<Option<EncodedFrame>, Box<dyn std::error::Error + Send + Sync>>),
    FrameClassifyDone {
        result: Result<Classification, ClassifyError>,
        observed_at: String,
    },
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeTick,
    CaptureFrame,
    ClassifyFrame { frame: EncodedFrame },
}

pub fn init(timeline_window: usize) -> (Model, Vec<Effect>) {
    (
        Model {
            aggregator: Aggregator::new(timeline_window),
            ..Model::default()
        },
        vec![Effect::SubscribeTick],
    )
}

pub fn is_done(model: &Model) -> bool {
    model.phase == Phase::Stopped
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.phase.clone(), event) {
        (Phase::Stopped, _) => (model, vec![]),
        (_, Event::Stop) => (
            Model {
                phase: Phase::Stopped,
                ..model
            },
            vec![],
        ),

        // Sampling cycle
        (Phase::Idle, Event::Tick) => (
            Model {
                phase: Phase::Capturing,
                ..model
            },
            vec![Effect::CaptureFrame],
        ),
        (Phase::Capturing | Phase::Classifying, Event::Tick) => (
            Model {
                skipped_ticks: model.skipped_ticks + 1,
                ..model
            },
            vec![],
        ),
        (Phase::Capturing, Event::FrameCaptureDone(Ok(Some(frame)))) => (
            Model {
                phase: Phase::Classifying,
                ..model
            },
            vec![Effect::ClassifyFrame { frame }],
        ),
        // No frame, or the camera failed: skip this cycle without touching state.
        (Phase::Capturing, Event::FrameCaptureDone(Ok(None) | Err(_))) => (
            Model {
                phase: Phase::Idle,
                ..model
            },
            vec![],
        ),
        (
            Phase::Classifying,
            Event::FrameClassifyDone {
                result,
                observed_at,
            },
        ) => {
            let mut aggregator = model.aggregator;
            match result {
                Ok(classification) => {
                    aggregator.ingest(&ClassificationResult {
                        label: classification.label,
                        confidence: classification.confidence,
                        observed_at,
                    });
                }
                Err(error) => aggregator.record_error(error.to_string()),
            }
            (
                Model {
                    phase: Phase::Idle,
                    aggregator,
                    ..model
                },
                vec![],
            )
        }

        // Default case
        _ => (model, vec![]),
    }
}
