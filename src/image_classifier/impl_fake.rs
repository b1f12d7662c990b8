use crate::device_camera::interface::EncodedFrame;
use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::timeline::category::Category;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Picks a random category and confidence for every frame.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, frame: &EncodedFrame) -> Result<Classification, ClassifyError> {
        let _ = self
            .logger
            .info(&format!("Classifying {} byte frame", frame.bytes.len()));

        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, Category::ALL.len())
            .map_err(|e| ClassifyError::Rejected(e.to_string()))?;
        let confidence_dist =
            Uniform::new_inclusive(0.0, 100.0).map_err(|e| ClassifyError::Rejected(e.to_string()))?;

        let confidence: f64 = confidence_dist.sample(&mut rng);

        Ok(Classification {
            label: Category::ALL[index_dist.sample(&mut rng)],
            confidence: (confidence * 100.0).round() / 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::clock::Timezone;
    use crate::library::logger::impl_console::LoggerConsole;

    #[test]
    fn test_confidence_in_range_with_two_decimals() {
        let classifier = ImageClassifierFake::new(Arc::new(LoggerConsole::new(Timezone::utc())));

        for _ in 0..50 {
            let result = classifier.classify(&EncodedFrame::jpeg(vec![])).unwrap();
            assert!((0.0..=100.0).contains(&result.confidence));
            let scaled = result.confidence * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }
}
