use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

/// Elm-style event loop: a single thread owns the model and applies
/// `transition`, while effects run on their own threads and report back
/// through the event channel.
pub struct StateMachine<TModel, TEvent, TEffect, T, R, E, D>
where
    T: Fn(TModel, TEvent) -> (TModel, Vec<TEffect>),
    R: FnMut(&TModel),
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TModel) -> bool,
{
    init: (TModel, Vec<TEffect>),
    transition_fn: T,
    render_fn: R,
    run_effect_fn: Arc<E>,
    is_done_fn: D,
    _event: std::marker::PhantomData<TEvent>,
}

impl<TModel, TEvent, TEffect, T, R, E, D> StateMachine<TModel, TEvent, TEffect, T, R, E, D>
where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TModel, TEvent) -> (TModel, Vec<TEffect>),
    R: FnMut(&TModel),
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TModel) -> bool,
{
    pub fn new(
        init: (TModel, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
    ) -> Self {
        Self {
            init,
            transition_fn,
            render_fn,
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn,
            _event: std::marker::PhantomData,
        }
    }

    /// Runs until `is_done_fn` holds for the current model and returns it.
    pub fn run(
        mut self,
        event_sender: Sender<TEvent>,
        event_receiver: Receiver<TEvent>,
    ) -> Result<TModel, Box<dyn std::error::Error + Send + Sync>> {
        let (mut model, effects) = self.init;

        (self.render_fn)(&model);
        spawn_effects(&self.run_effect_fn, &event_sender, effects);

        while !(self.is_done_fn)(&model) {
            let event = event_receiver.recv()?;
            let (new_model, effects) = (self.transition_fn)(model, event);
            model = new_model;
            (self.render_fn)(&model);
            spawn_effects(&self.run_effect_fn, &event_sender, effects);
        }

        Ok(model)
    }
}

fn spawn_effects<TEvent, TEffect, E>(
    run_effect_fn: &Arc<E>,
    event_sender: &Sender<TEvent>,
    effects: Vec<TEffect>,
) where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    for effect in effects {
        let effect_sender = event_sender.clone();
        let run_effect_fn = Arc::clone(run_effect_fn);
        std::thread::spawn(move || {
            run_effect_fn(effect, effect_sender);
        });
    }
}
