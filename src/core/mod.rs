//! Core search-engine contracts.
//!
//! This module contains the pure interface between the plan engine and any
//! concrete machine representation:
//! - The `Machine` capability trait (enumerate candidate events, apply one
//!   event, fingerprint a configuration)
//! - `Fingerprint`, the stable configuration identity key
//!
//! Everything here is pure (no side effects); the engine is written once
//! against these contracts and never inspects machine internals.

mod fingerprint;
mod machine;

pub use fingerprint::Fingerprint;
pub use machine::Machine;
