use crate::device_camera::interface::EncodedFrame;
use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::timeline::category::Category;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct PredictRequest {
    image: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    error: Option<String>,
    emotion: Option<String>,
    confidence: Option<f64>,
}

/// Posts frames to a `/predict` style endpoint.
pub struct ImageClassifierHttp {
    agent: ureq::Agent,
    endpoint: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierHttp {
    pub fn new(endpoint: String, timeout: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint,
            logger: logger.with_namespace("classifier").with_namespace("http"),
        }
    }
}

impl ImageClassifier for ImageClassifierHttp {
    fn classify(&self, frame: &EncodedFrame) -> Result<Classification, ClassifyError> {
        let request = PredictRequest {
            image: frame.to_data_url(),
        };

        let body = self
            .agent
            .post(&self.endpoint)
            .send_json(&request)
            .map_err(|e| ClassifyError::Connection(e.to_string()))?
            .into_string()
            .map_err(|e| ClassifyError::Connection(e.to_string()))?;

        let result = interpret_response(&body);
        if let Err(ClassifyError::Connection(detail)) = &result {
            let _ = self
                .logger
                .warn(&format!("Unusable response from {}: {}", self.endpoint, detail));
        }
        result
    }
}

/// Maps a response body to an outcome. An `error` field wins over any
/// result fields present alongside it.
pub fn interpret_response(body: &str) -> Result<Classification, ClassifyError> {
    let response: PredictResponse =
        serde_json::from_str(body).map_err(|e| ClassifyError::Connection(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(ClassifyError::Rejected(error));
    }

    let (Some(emotion), Some(confidence)) = (response.emotion, response.confidence) else {
        return Err(ClassifyError::Connection(
            "response has neither a result nor an error".to_string(),
        ));
    };

    let label = emotion
        .parse::<Category>()
        .map_err(|_| ClassifyError::UnknownLabel(emotion))?;

    Ok(Classification { label, confidence })
}
