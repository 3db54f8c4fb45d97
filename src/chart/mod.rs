//! Concrete chart machines for driving the plan engine.
//!
//! A [`Chart`] is a flat state chart — named states, a typed context, and an
//! ordered transition table — that implements the core [`crate::core::Machine`]
//! trait. It exists so plans can be searched and replayed without writing a
//! machine implementation by hand; anything more exotic (hierarchy, parallel
//! regions) can still implement the trait directly.

pub mod builder;
pub mod error;
pub mod guard;
pub mod machine;
pub mod macros;

pub use builder::{ChartBuilder, TransitionBuilder};
pub use error::BuildError;
pub use guard::Guard;
pub use machine::{Chart, ChartConfig, ContextAction, Transition};

/// Create a transition gated by a guard predicate.
///
/// # Example
///
/// ```
/// use statepath::chart::guarded_transition;
///
/// let transition = guarded_transition("idle", "START", "running", |count: &u32| *count < 3);
/// assert!(transition.enabled("idle", &0));
/// assert!(!transition.enabled("idle", &3));
/// ```
pub fn guarded_transition<C, F>(
    from: impl Into<String>,
    event: impl Into<String>,
    to: impl Into<String>,
    guard: F,
) -> Transition<C>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .from(from)
        .on(event)
        .to(to)
        .when(guard)
        .build()
        .expect("guarded transition should always build")
}

/// Create a transition that applies a pure context mutation.
///
/// # Example
///
/// ```
/// use statepath::chart::mutating_transition;
///
/// let transition = mutating_transition("d", "NEXT", "d", |count: &u32| count + 1);
/// let action = transition.action.as_ref().unwrap();
/// assert_eq!(action(&0), 1);
/// ```
pub fn mutating_transition<C, F>(
    from: impl Into<String>,
    event: impl Into<String>,
    to: impl Into<String>,
    action: F,
) -> Transition<C>
where
    F: Fn(&C) -> C + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .from(from)
        .on(event)
        .to(to)
        .mutate(action)
        .build()
        .expect("mutating transition should always build")
}
