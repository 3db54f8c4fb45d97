//! Shortest-plan search and its result model.
//!
//! - `shortest_plans_to` / `shortest_plans_from_to`: the breadth-first
//!   engine (one plan per matched fingerprint at the minimal distance)
//! - `Step`, `Path`, `Plan`: the replayable result model

mod engine;
mod path;

pub use engine::{shortest_plans_from_to, shortest_plans_to};
pub use path::{Path, Plan, Step};
