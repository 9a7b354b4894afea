//! Priority engine facade.
//!
//! [`PriorityEngine`] orchestrates one batch query end to end: cycle gate,
//! per-task component scoring with whole-batch visibility, weighted
//! aggregation under the selected [`Strategy`], and a stable descending
//! sort. `suggest` is `rank` truncated to a top subset with per-entry
//! reason strings.

mod runner;
mod strategy;
mod types;

pub use runner::{PriorityEngine, DEFAULT_SUGGESTIONS};
pub use strategy::{Strategy, WeightProfile};
pub use types::{ComponentScores, CycleError, RankedTask, ScoreResult};
