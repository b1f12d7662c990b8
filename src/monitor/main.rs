use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::monitor::core::{init, is_done, transition, Effect, Event, Model};
use crate::monitor::render::Render;
use crate::monitor::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Stops a running monitor from another thread.
#[derive(Clone)]
pub struct StopHandle {
    event_sender: Sender<Event>,
}

impl StopHandle {
    pub fn stop(&self) {
        let _ = self.event_sender.send(Event::Stop);
    }
}

pub struct Monitor {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
}

impl Monitor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("monitor"),
            device_camera,
            device_display,
            image_classifier,
            event_sender,
            event_receiver,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            event_sender: self.event_sender.clone(),
        }
    }

    /// Blocks until stopped and returns the final model.
    pub fn run(self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        let run_effect = RunEffect::new(
            self.config.clone(),
            self.logger.clone(),
            self.device_camera.clone(),
            self.image_classifier.clone(),
        );
        let mut render = Render::new(self.device_display.clone(), self.logger.clone());
        let logger = self.logger.clone();

        let state_machine = StateMachine::new(
            init(self.config.timeline_window),
            move |model: Model, event: Event| {
                let _ = logger.info(&format!("event: {:?}", event));
                let skipped_before = model.skipped_ticks;
                let (new_model, effects) = transition(model, event);
                if new_model.skipped_ticks > skipped_before {
                    let _ = logger.warn("Tick skipped, previous cycle still in flight");
                }
                let _ = logger.info(&format!(
                    "phase: {:?}, rows: {}, effects: {:?}",
                    new_model.phase,
                    new_model.aggregator.timeline().len(),
                    effects
                ));
                (new_model, effects)
            },
            move |model: &Model| render.render(model),
            move |effect: Effect, event_sender: Sender<Event>| {
                run_effect.run_effect(effect, event_sender)
            },
            is_done,
        );

        let _ = self.logger.info("Monitor started");
        let model = state_machine.run(self.event_sender, self.event_receiver)?;
        let _ = self.logger.info(&format!(
            "Monitor stopped with {} rows, {} skipped ticks",
            model.aggregator.timeline().len(),
            model.skipped_ticks
        ));

        Ok(model)
    }
}
