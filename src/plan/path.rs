//! Replayable plan data model.
//!
//! A `Path` is one concrete event sequence from a start configuration to a
//! terminal match; a `Plan` groups every equal-minimal path that reaches the
//! same matched fingerprint. All types are immutable values: extending a path
//! returns a new one.

use serde::{Deserialize, Serialize};

/// One edge traversed: the event applied and the configuration it produced.
///
/// Steps are ordered and belong to exactly one [`Path`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step<C, E> {
    /// The event that was triggered.
    pub event: E,
    /// The configuration the machine ended up in.
    pub config: C,
}

/// An ordered sequence of steps from a start configuration to an end
/// configuration.
///
/// The start configuration is kept alongside the steps so that zero-length
/// paths (a start that already matches the target) remain replayable: a test
/// runner always knows where the sequence begins.
///
/// # Example
///
/// ```rust
/// use statepath::plan::{Path, Step};
///
/// let path: Path<&str, &str> = Path::new("a");
/// assert!(path.is_empty());
/// assert_eq!(path.end(), &"a");
///
/// let path = path.extended("NEXT", "b");
/// assert_eq!(path.len(), 1);
/// assert_eq!(path.end(), &"b");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<C, E> {
    /// The configuration this path starts from.
    pub start: C,
    /// The edges traversed, in order.
    pub steps: Vec<Step<C, E>>,
}

impl<C: Clone, E: Clone> Path<C, E> {
    /// A zero-length path beginning (and ending) at `start`.
    pub fn new(start: C) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Number of steps. Plan minimality is measured in this length.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The configuration the path ends in.
    pub fn end(&self) -> &C {
        self.steps.last().map(|step| &step.config).unwrap_or(&self.start)
    }

    /// The events along the path, in order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.steps.iter().map(|step| &step.event)
    }

    /// Extend with one more step, returning a new path.
    ///
    /// Pure: the existing path is unchanged.
    pub fn extended(&self, event: E, config: C) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step { event, config });
        Self {
            start: self.start.clone(),
            steps,
        }
    }
}

/// All shortest paths to one matched configuration.
///
/// One plan is produced per distinct matched fingerprint at the globally
/// minimal match distance. `config` is the representative matched
/// configuration; every path in `paths` has the same (minimal) length and
/// ends in a configuration with that fingerprint. Paths are ordered by
/// discovery order, which follows candidate-event enumeration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan<C, E> {
    /// The matched configuration this plan reaches.
    pub config: C,
    /// Every minimal-length path reaching it.
    pub paths: Vec<Path<C, E>>,
}
