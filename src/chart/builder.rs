//! Fluent builders for charts and transitions.

use super::error::BuildError;
use super::guard::Guard;
use super::machine::{Chart, Transition};
use std::sync::Arc;

/// Builder for constructing charts with a fluent API.
///
/// # Example
///
/// ```rust
/// use statepath::chart::{ChartBuilder, TransitionBuilder};
///
/// let chart = ChartBuilder::new()
///     .initial("idle")
///     .context(0u32)
///     .transition(
///         TransitionBuilder::new()
///             .from("idle")
///             .on("START")
///             .to("running"),
///     )
///     .unwrap()
///     .build()
///     .unwrap();
/// # let _ = chart;
/// ```
pub struct ChartBuilder<C> {
    initial: Option<String>,
    context: Option<C>,
    transitions: Vec<Transition<C>>,
}

impl<C> ChartBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state name (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Set the initial context value (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<C>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the chart.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Chart<C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(Chart {
            initial,
            context,
            transitions: self.transitions,
        })
    }
}

impl<C> Default for ChartBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<C> {
    from: Option<String>,
    event: Option<String>,
    to: Option<String>,
    guard: Option<Guard<C>>,
    action: Option<Arc<dyn Fn(&C) -> C + Send + Sync>>,
}

impl<C> TransitionBuilder<C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state name (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the triggering event name (required).
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the target state name (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set a pure context mutation (optional).
    pub fn mutate<F>(mut self, action: F) -> Self
    where
        F: Fn(&C) -> C + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            event,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<C> Default for TransitionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
