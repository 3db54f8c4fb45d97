//! Statepath: shortest-plan search over state machines.
//!
//! Statepath finds *all* minimum-length event sequences that drive a state
//! machine from a start condition to a target condition. Each returned plan
//! is a literal, replayable sequence of events with the configuration each
//! event produces, ready to feed a model-based test runner.
//!
//! The machine is a black box: the engine only ever enumerates candidate
//! events, applies one event, and fingerprints configurations, all through
//! the [`core::Machine`] trait. Matched configurations are never expanded
//! further, so self-looping matched states cannot make the search diverge.
//!
//! # Core Concepts
//!
//! - **Machine**: the capability trait any machine representation implements
//! - **Chart**: a batteries-included flat state chart with guards and
//!   context actions
//! - **Plan/Path/Step**: the replayable search result
//!
//! # Example
//!
//! ```rust
//! use statepath::chart::ChartBuilder;
//! use statepath::plan::shortest_plans_to;
//! use statepath::transitions;
//!
//! let chart = ChartBuilder::new()
//!     .initial("a")
//!     .context(())
//!     .transitions(transitions! {
//!         "a" on "NEXT" => "b",
//!         "b" on "NEXT" => "c",
//!         "c" on "NEXT" => "d",
//!     })
//!     .build()
//!     .unwrap();
//!
//! let plans = shortest_plans_to(&chart, |config| config.matches("c"));
//!
//! assert_eq!(plans.len(), 1);
//! let events: Vec<&String> = plans[0].paths[0].events().collect();
//! assert_eq!(events, ["NEXT", "NEXT"]);
//! ```

pub mod chart;
pub mod core;
pub mod graph;
pub mod plan;

// Re-export commonly used types
pub use chart::{Chart, ChartBuilder, ChartConfig};
pub use core::{Fingerprint, Machine};
pub use plan::{shortest_plans_from_to, shortest_plans_to, Path, Plan, Step};
