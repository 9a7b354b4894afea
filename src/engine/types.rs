//! Result types for scoring and ranking.

use thiserror::Error;

use crate::task::Task;

/// The four component scores that feed the composite, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentScores {
    /// Deadline proximity score.
    pub urgency: f64,
    /// Stated importance, normalized.
    pub importance: f64,
    /// Inverse effort score (small tasks score high).
    pub effort: f64,
    /// Whether other tasks are blocked by this one.
    pub dependency: f64,
}

/// Composite score for a single task, with its breakdown and a
/// human-readable explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Weighted composite in `[0, 1]`, rounded to three decimals.
    pub priority_score: f64,
    /// The unweighted component scores behind the composite.
    pub component_scores: ComponentScores,
    /// One-sentence explanation of what drives the score.
    pub explanation: String,
}

/// A task paired with its score and rank metadata.
///
/// `position` is the task's 1-based position in the input batch, which is
/// also its dependency identity; ranking reorders tasks but positions keep
/// pointing into the original batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedTask {
    /// 1-based position in the input batch.
    pub position: usize,
    /// The task itself.
    pub task: Task,
    /// Score breakdown for this task.
    pub score: ScoreResult,
    /// Short reason string, only populated by suggestion queries.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub suggestion_reason: Option<String>,
}

/// Ranking refused because the dependency graph contains cycles.
///
/// Carries every cycle found, each as 1-based positions in traversal
/// order, so the caller can report all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("circular dependencies detected: {}", render_cycles(.cycles))]
pub struct CycleError {
    /// All cycles found in the batch.
    pub cycles: Vec<Vec<usize>>,
}

fn render_cycles(cycles: &[Vec<usize>]) -> String {
    cycles
        .iter()
        .map(|cycle| {
            cycle
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" -> ")
        })
        .collect::<Vec<_>>()
        .join("; ")
}
