use crate::device_camera::interface::EncodedFrame;
use crate::timeline::category::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: Category,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// The service answered but reported a problem with the frame.
    #[error("{0}")]
    Rejected(String),
    /// The service answered with a label outside the known categories.
    #[error("Unrecognized emotion label: {0}")]
    UnknownLabel(String),
    /// The service could not be reached or its answer was unusable.
    #[error("Cannot connect to classification service")]
    Connection(String),
}

pub trait ImageClassifier {
    fn classify(&self, frame: &EncodedFrame) -> Result<Classification, ClassifyError>;
}
