//! Component scoring functions.
//!
//! Four pure functions map a task's fields onto `[0, 1]` sub-scores, one
//! per prioritization factor:
//!
//! - [`urgency_score`]: calendar distance to the due date
//! - [`importance_score`]: caller-declared 1-10 importance
//! - [`effort_score`]: estimated hours, favoring quick wins
//! - [`dependency_score`]: whether the task blocks others in the batch
//!
//! # Design
//!
//! Every function is total: absent or unparseable fields fall back to
//! [`NEUTRAL_SCORE`] instead of failing, so one bad field degrades a single
//! component rather than the whole batch. The functions hold no state and
//! read nothing ambient; urgency takes its reference date as a parameter.

mod components;

pub use components::{
    dependency_score, effort_score, importance_score, urgency_score, NEUTRAL_SCORE,
};
