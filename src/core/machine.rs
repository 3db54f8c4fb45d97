//! The capability trait the search engine consumes.
//!
//! The engine never models guards, hierarchy, or any other state-machine
//! feature directly. It depends only on the narrow capabilities below and
//! treats the machine as a black-box transition function plus an event
//! candidate generator.

use super::fingerprint::Fingerprint;

/// Black-box view of a state machine, as consumed by the plan engine.
///
/// All methods are pure: deterministic, free of observable side effects on
/// shared state. The engine performs no validation of these contracts;
/// a non-deterministic implementation is unsupported.
///
/// # Example
///
/// ```rust
/// use statepath::core::{Fingerprint, Machine};
///
/// /// A counter that increments until it saturates at 3.
/// struct Counter;
///
/// impl Machine for Counter {
///     type Config = u8;
///     type Event = &'static str;
///
///     fn initial_config(&self) -> u8 {
///         0
///     }
///
///     fn candidate_events(&self, config: &u8) -> Vec<&'static str> {
///         if *config < 3 {
///             vec!["INC"]
///         } else {
///             vec![]
///         }
///     }
///
///     fn apply(&self, config: &u8, _event: &&'static str) -> u8 {
///         config + 1
///     }
///
///     fn fingerprint(&self, config: &u8) -> Fingerprint {
///         Fingerprint::new(config.to_string())
///     }
/// }
///
/// let machine = Counter;
/// let config = machine.initial_config();
/// assert_eq!(machine.candidate_events(&config), vec!["INC"]);
/// assert_eq!(machine.apply(&config, &"INC"), 1);
/// ```
pub trait Machine {
    /// Snapshot of the machine's current state plus context. Opaque to the
    /// engine; identity is derived via [`Machine::fingerprint`], never by
    /// reference.
    type Config: Clone;

    /// A triggerable transition input.
    type Event: Clone;

    /// The configuration the machine starts in.
    fn initial_config(&self) -> Self::Config;

    /// Events that are enabled in the given configuration, in priority order.
    ///
    /// The ordering is the tie-break among equally-short paths discovered in
    /// the same search step: the first-enumerated event expands first, which
    /// makes plan and path ordering deterministic. An empty sequence marks a
    /// terminal configuration.
    fn candidate_events(&self, config: &Self::Config) -> Vec<Self::Event>;

    /// The configuration that results from triggering `event` in `config`.
    ///
    /// May return the configuration unchanged. The engine still treats the
    /// result as a distinct step if the context mutated, because the
    /// fingerprint captures that.
    fn apply(&self, config: &Self::Config, event: &Self::Event) -> Self::Config;

    /// Identity key for a configuration, per the [`Fingerprint`] invariant.
    fn fingerprint(&self, config: &Self::Config) -> Fingerprint;
}
