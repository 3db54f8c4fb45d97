//! Guard predicates over chart context.
//!
//! Guards are pure boolean functions evaluated against the context before a
//! transition is considered enabled.

use std::sync::Arc;

/// Pure predicate that determines whether a transition is enabled.
///
/// # Example
///
/// ```rust
/// use statepath::chart::Guard;
///
/// let below_limit = Guard::new(|count: &u32| *count < 3);
///
/// assert!(below_limit.check(&0));
/// assert!(!below_limit.check(&3));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect-free; the search
    /// engine may evaluate it any number of times.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against a context value.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
