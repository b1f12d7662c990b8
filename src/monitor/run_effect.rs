use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::monitor::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            device_camera,
            image_classifier,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            // Ends once the event loop has gone away.
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if event_sender.send(Event::Tick).is_err() {
                    break;
                }
            },
            Effect::CaptureFrame => {
                let frame = self.device_camera.capture_frame();
                if let Err(e) = &frame {
                    let _ = self.logger.warn(&format!("Frame capture failed: {}", e));
                }
                let _ = event_sender.send(Event::FrameCaptureDone(frame));
            }
            Effect::ClassifyFrame { frame } => {
                let result = self.image_classifier.classify(&frame);
                let observed_at = self.config.format_now();
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .warn(&format!("Classification failed: {:?}", e));
                }
                let _ = event_sender.send(Event::FrameClassifyDone {
                    result,
                    observed_at,
                });
            }
        }
    }
}
