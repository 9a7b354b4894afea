//! Dependency cycle detection.
//!
//! Tasks reference each other by 1-based batch position, so the dependency
//! relation of a batch forms a directed graph over positions. A cycle in
//! that graph makes prioritization meaningless (no valid work order
//! exists), so detection runs once per batch, before any scoring, as a
//! hard gate.
//!
//! The detector reports *paths*, not just membership: each cycle is the
//! ordered sub-path from the first re-visited node through the point of
//! re-visit, which callers can render directly in a rejection message.

mod detector;

pub use detector::detect_cycles;
