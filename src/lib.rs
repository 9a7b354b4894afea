//! Strategy-weighted task prioritization engine.
//!
//! Computes a composite priority score for every task in a submitted batch
//! and ranks the batch, or suggests a top subset:
//!
//! - **Scoring**: pure component scorers for urgency (deadline proximity),
//!   importance (stated 1-10 weight), effort (inverse task size), and
//!   dependencies (whether other tasks are blocked by this one).
//! - **Cycle detection**: iterative depth-first traversal over positional
//!   dependency references; any cycle rejects the whole batch before
//!   anything is scored.
//! - **Engine**: named strategies with fixed weight profiles, weighted
//!   aggregation, stable descending ranking, and suggestion queries with
//!   human-readable reasons.
//!
//! # Architecture
//!
//! The crate is a pure library: no ambient clock, no I/O, no persistence.
//! Callers pass a task batch plus an explicit reference date and own
//! transport, request validation, and storage. Identical inputs always
//! produce identical rankings, so results are safe to cache or compare
//! across processes.

pub mod cycle;
pub mod engine;
pub mod scoring;
pub mod task;
