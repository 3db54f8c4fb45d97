//! Stable identity keys for machine configurations.
//!
//! Fingerprints are how the search engine decides whether two configurations
//! are "the same place" in the transition graph. They back the visited set
//! and detect no-op transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity key for a configuration.
///
/// Two configurations that are behaviorally indistinguishable for planning
/// purposes must produce equal fingerprints; two that differ in active state
/// or in context fields that affect future transitions must produce different
/// fingerprints. Beyond equality correctness, no ordering is guaranteed
/// across different configurations.
///
/// # Example
///
/// ```rust
/// use statepath::core::Fingerprint;
///
/// let a = Fingerprint::new("idle|{\"count\":0}");
/// let b = Fingerprint::new("idle|{\"count\":0}");
/// let c = Fingerprint::new("idle|{\"count\":1}");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Create a fingerprint from a raw key.
    ///
    /// The caller is responsible for the stability invariant: the same
    /// logical configuration must map to the same key on every call.
    pub fn new(key: impl Into<String>) -> Self {
        Fingerprint(key.into())
    }

    /// The raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
