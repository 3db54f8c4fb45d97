//! Concrete chart machine: named states, typed context, ordered transitions.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::guard::Guard;
use crate::core::{Fingerprint, Machine};

/// Pure context mutation attached to a transition.
pub type ContextAction<C> = Arc<dyn Fn(&C) -> C + Send + Sync>;

/// One transition edge of a chart.
///
/// Declaration order matters twice: it is the candidate-event priority order
/// (first declared, first expanded by the search), and among transitions
/// sharing a source state and event, the first whose guard passes is the one
/// that fires.
pub struct Transition<C> {
    /// Source state name.
    pub from: String,
    /// Event name that triggers this transition.
    pub event: String,
    /// Target state name.
    pub to: String,
    /// Optional enabling predicate over the context.
    pub guard: Option<Guard<C>>,
    /// Optional pure context mutation applied when the transition fires.
    pub action: Option<ContextAction<C>>,
}

impl<C> Transition<C> {
    /// An unguarded transition with no context action.
    pub fn new(
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            event: event.into(),
            to: to.into(),
            guard: None,
            action: None,
        }
    }

    /// Whether this transition is enabled for the given state and context.
    pub fn enabled(&self, state: &str, context: &C) -> bool {
        self.from == state && self.guard.as_ref().is_none_or(|g| g.check(context))
    }
}

impl<C> Clone for Transition<C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
            action: self.action.as_ref().map(Arc::clone),
        }
    }
}

/// Snapshot of a chart machine: active state name plus context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig<C> {
    /// Name of the active state.
    pub state: String,
    /// Context data carried alongside the state.
    pub context: C,
}

impl<C> ChartConfig<C> {
    /// Whether the active state has the given name.
    ///
    /// This is the usual building block for start/target predicates:
    /// `|config| config.matches("done")`.
    pub fn matches(&self, state: &str) -> bool {
        self.state == state
    }
}

/// A flat state chart driven by named events.
///
/// `Chart` is the crate's concrete [`Machine`] implementation: states are
/// plain names, the context is any `Clone + Serialize` value, and the
/// fingerprint of a configuration is the state name joined with the JSON
/// serialization of the context — so a context-mutating self-loop yields a
/// fresh fingerprint while a pure no-op does not. The context type must
/// serialize to JSON (non-string map keys, for example, are not supported).
///
/// Build charts with [`super::ChartBuilder`].
pub struct Chart<C> {
    pub(crate) initial: String,
    pub(crate) context: C,
    pub(crate) transitions: Vec<Transition<C>>,
}

impl<C: Clone + Serialize> Chart<C> {
    /// The configuration fingerprint: `state|json(context)`.
    fn config_fingerprint(&self, config: &ChartConfig<C>) -> Fingerprint {
        let context = serde_json::to_string(&config.context)
            .expect("chart context must serialize to JSON");
        Fingerprint::new(format!("{}|{}", config.state, context))
    }
}

impl<C: Clone + Serialize> Machine for Chart<C> {
    type Config = ChartConfig<C>;
    type Event = String;

    fn initial_config(&self) -> ChartConfig<C> {
        ChartConfig {
            state: self.initial.clone(),
            context: self.context.clone(),
        }
    }

    fn candidate_events(&self, config: &ChartConfig<C>) -> Vec<String> {
        let mut events = Vec::new();
        for transition in &self.transitions {
            if transition.enabled(&config.state, &config.context)
                && !events.contains(&transition.event)
            {
                events.push(transition.event.clone());
            }
        }
        events
    }

    fn apply(&self, config: &ChartConfig<C>, event: &String) -> ChartConfig<C> {
        let fired = self.transitions.iter().find(|transition| {
            transition.event == *event && transition.enabled(&config.state, &config.context)
        });
        let Some(transition) = fired else {
            // Not enabled here: the configuration is unchanged.
            return config.clone();
        };
        let context = match &transition.action {
            Some(action) => action(&config.context),
            None => config.context.clone(),
        };
        ChartConfig {
            state: transition.to.clone(),
            context,
        }
    }

    fn fingerprint(&self, config: &ChartConfig<C>) -> Fingerprint {
        self.config_fingerprint(config)
    }
}
