use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Dimension, ParameterSet};
use crate::page::Page;

use super::{Debouncer, HandlerId, SharedControl};

/// Ties one page control to the dimension it filters on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBinding {
    pub dimension: Dimension,
    pub control_id: String,
}

impl ControlBinding {
    #[must_use]
    pub fn new(dimension: Dimension, control_id: impl Into<String>) -> Self {
        Self {
            dimension,
            control_id: control_id.into(),
        }
    }
}

/// Receives the parameter set built when a debounce window elapses.
pub type ParametersHandler = Rc<dyn Fn(ParameterSet)>;

struct BindingState {
    topic: String,
    controls: Vec<(Dimension, SharedControl)>,
    debouncer: Debouncer,
    on_parameters: ParametersHandler,
}

/// Change-triggered, debounced filter wiring for one chart topic.
///
/// Controls missing from the page are skipped. Dropping the binding
/// unregisters its handlers and cancels any pending debounce.
pub struct FilterBinding {
    state: Rc<BindingState>,
    registrations: Vec<(SharedControl, HandlerId)>,
}

impl FilterBinding {
    /// Locates every bound control on `page` and registers a debounced change handler.
    pub fn attach(
        topic: impl Into<String>,
        page: &dyn Page,
        bindings: &[ControlBinding],
        window: Duration,
        on_parameters: ParametersHandler,
    ) -> Self {
        let topic = topic.into();
        let mut controls = Vec::with_capacity(bindings.len());
        for binding in bindings {
            match page.control(&binding.control_id) {
                Some(control) => controls.push((binding.dimension, control)),
                None => debug!(
                    topic = %topic,
                    control = %binding.control_id,
                    "filter control not on page; not binding"
                ),
            }
        }

        let state = Rc::new(BindingState {
            topic,
            controls,
            debouncer: Debouncer::new(window),
            on_parameters,
        });

        let registrations = state
            .controls
            .iter()
            .map(|(_, control)| {
                let weak = Rc::downgrade(&state);
                let id = control
                    .borrow_mut()
                    .on_change(Rc::new(move || schedule_refresh(&weak)));
                (Rc::clone(control), id)
            })
            .collect();
        debug!(
            topic = %state.topic,
            bound = state.controls.len(),
            "filter binding attached"
        );

        Self {
            state,
            registrations,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.state.topic
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.state.controls.len()
    }

    /// Parameter set built from the bound controls' current values.
    #[must_use]
    pub fn current_parameters(&self) -> ParameterSet {
        collect_parameters(&self.state.controls)
    }

    #[must_use]
    pub fn debouncer(&self) -> &Debouncer {
        &self.state.debouncer
    }
}

impl Drop for FilterBinding {
    fn drop(&mut self) {
        self.state.debouncer.cancel();
        for (control, id) in self.registrations.drain(..) {
            // a control borrowed elsewhere keeps the handler; it only holds a weak ref
            if let Ok(mut control) = control.try_borrow_mut() {
                control.remove_handler(id);
            }
        }
    }
}

fn schedule_refresh(weak: &Weak<BindingState>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    trace!(topic = %state.topic, "filter change observed");
    let fire = Rc::downgrade(&state);
    state.debouncer.trigger(Rc::new(move || {
        if let Some(state) = fire.upgrade() {
            let params = collect_parameters(&state.controls);
            debug!(topic = %state.topic, ?params, "filters settled");
            (state.on_parameters)(params);
        }
    }));
}

/// Builds a parameter set from control values; empty values are omitted.
#[must_use]
pub fn collect_parameters(controls: &[(Dimension, SharedControl)]) -> ParameterSet {
    let mut params = ParameterSet::new();
    for (dimension, control) in controls {
        params.set(dimension.key(), control.borrow().value());
    }
    params
}
