//! Priority engine: scoring, ranking, and suggestion queries.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::debug;

use crate::cycle::detect_cycles;
use crate::scoring::{
    dependency_score, effort_score, importance_score, urgency_score, NEUTRAL_SCORE,
};
use crate::task::Task;

use super::strategy::{Strategy, WeightProfile};
use super::types::{ComponentScores, CycleError, RankedTask, ScoreResult};

/// Conventional number of entries returned by suggestion queries.
pub const DEFAULT_SUGGESTIONS: usize = 3;

/// A component strictly above this contributes to explanations and
/// suggestion reasons.
const HIGHLIGHT_THRESHOLD: f64 = 0.7;

/// Strategy-weighted task prioritization engine.
///
/// The engine is immutable and stateless: the strategy's weight profile is
/// resolved once at construction, and every query is a pure function of the
/// task batch and the reference date. Nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskrank::engine::{PriorityEngine, Strategy};
/// use taskrank::task::Task;
///
/// let tasks = vec![
///     Task::new("Fix critical login bug")
///         .with_due_date_text("2025-06-16")
///         .with_importance(9),
///     Task::new("Write project documentation"),
/// ];
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
///
/// let engine = PriorityEngine::new(Strategy::SmartBalance);
/// let ranked = engine.rank(&tasks, today)?;
/// assert_eq!(ranked[0].position, 1);
/// # Ok::<(), taskrank::engine::CycleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityEngine {
    strategy: Strategy,
    weights: WeightProfile,
}

impl PriorityEngine {
    /// Creates an engine for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            weights: strategy.weights(),
        }
    }

    /// Creates an engine from a wire name, falling back to
    /// [`Strategy::SmartBalance`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::new(Strategy::from_name(name))
    }

    /// The strategy this engine weights by.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The resolved weight profile.
    pub fn weights(&self) -> WeightProfile {
        self.weights
    }

    /// Scores the task at 1-based `position` within `tasks`.
    ///
    /// The whole batch is needed because the dependency component looks at
    /// what other tasks reference. A position outside the batch scores
    /// neutrally on every component rather than panicking.
    pub fn score(&self, position: usize, tasks: &[Task], today: NaiveDate) -> ScoreResult {
        let task = position.checked_sub(1).and_then(|index| tasks.get(index));
        let components = match task {
            Some(task) => ComponentScores {
                urgency: round3(urgency_score(task.due_date.as_deref(), today)),
                importance: round3(importance_score(task.importance)),
                effort: round3(effort_score(task.estimated_hours)),
                dependency: round3(dependency_score(position, tasks)),
            },
            None => ComponentScores {
                urgency: NEUTRAL_SCORE,
                importance: NEUTRAL_SCORE,
                effort: NEUTRAL_SCORE,
                dependency: NEUTRAL_SCORE,
            },
        };

        let composite = components.urgency * self.weights.urgency
            + components.importance * self.weights.importance
            + components.effort * self.weights.effort
            + components.dependency * self.weights.dependencies;

        ScoreResult {
            priority_score: round3(composite.clamp(0.0, 1.0)),
            explanation: explanation(&components),
            component_scores: components,
        }
    }

    /// Ranks a batch by descending priority score.
    ///
    /// Fails with [`CycleError`] when the dependency graph contains cycles;
    /// an empty batch ranks to an empty vec. The sort is stable, so tasks
    /// with equal scores keep their submission order.
    pub fn rank(&self, tasks: &[Task], today: NaiveDate) -> Result<Vec<RankedTask>, CycleError> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }
        debug!("Ranking {} tasks with strategy {}", tasks.len(), self.strategy);

        let cycles = detect_cycles(tasks);
        if !cycles.is_empty() {
            debug!("Rejecting batch: {} dependency cycle(s) found", cycles.len());
            return Err(CycleError { cycles });
        }

        let mut ranked = self.score_batch(tasks, today);
        ranked.sort_by(|a, b| {
            b.score
                .priority_score
                .partial_cmp(&a.score.priority_score)
                .unwrap_or(Ordering::Equal)
        });
        Ok(ranked)
    }

    /// Ranks a batch and returns the top `limit` entries, each annotated
    /// with a short `"Priority #N: ..."` reason.
    ///
    /// The cycle gate applies exactly as in [`PriorityEngine::rank`]. See
    /// [`DEFAULT_SUGGESTIONS`] for the conventional limit.
    pub fn suggest(
        &self,
        tasks: &[Task],
        today: NaiveDate,
        limit: usize,
    ) -> Result<Vec<RankedTask>, CycleError> {
        let mut ranked = self.rank(tasks, today)?;
        let total = ranked.len();
        ranked.truncate(limit);
        debug!("Suggesting top {} of {} ranked tasks", ranked.len(), total);

        for (index, entry) in ranked.iter_mut().enumerate() {
            entry.suggestion_reason = Some(suggestion_reason(
                index + 1,
                &entry.score.component_scores,
            ));
        }
        Ok(ranked)
    }

    #[cfg(not(feature = "parallel"))]
    fn score_batch(&self, tasks: &[Task], today: NaiveDate) -> Vec<RankedTask> {
        (0..tasks.len())
            .map(|index| RankedTask {
                position: index + 1,
                task: tasks[index].clone(),
                score: self.score(index + 1, tasks, today),
                suggestion_reason: None,
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_batch(&self, tasks: &[Task], today: NaiveDate) -> Vec<RankedTask> {
        use rayon::prelude::*;

        (0..tasks.len())
            .into_par_iter()
            .map(|index| RankedTask {
                position: index + 1,
                task: tasks[index].clone(),
                score: self.score(index + 1, tasks, today),
                suggestion_reason: None,
            })
            .collect()
    }
}

impl Default for PriorityEngine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Builds the per-task explanation from components strictly above the
/// highlight threshold, in fixed component order.
fn explanation(components: &ComponentScores) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if components.urgency > HIGHLIGHT_THRESHOLD {
        parts.push("high urgency");
    }
    if components.importance > HIGHLIGHT_THRESHOLD {
        parts.push("high importance");
    }
    if components.effort > HIGHLIGHT_THRESHOLD {
        parts.push("quick win");
    }
    if components.dependency > HIGHLIGHT_THRESHOLD {
        parts.push("blocks other tasks");
    }

    if parts.is_empty() {
        "This task has moderate priority across all factors".to_string()
    } else {
        format!("This task has {}", parts.join(", "))
    }
}

/// Suggestion reasons use a slightly different urgency phrase than
/// explanations do.
fn suggestion_reason(rank: usize, components: &ComponentScores) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if components.urgency > HIGHLIGHT_THRESHOLD {
        parts.push("urgent deadline");
    }
    if components.importance > HIGHLIGHT_THRESHOLD {
        parts.push("high importance");
    }
    if components.effort > HIGHLIGHT_THRESHOLD {
        parts.push("quick win");
    }
    if components.dependency > HIGHLIGHT_THRESHOLD {
        parts.push("blocks other tasks");
    }

    if parts.is_empty() {
        format!("Priority #{rank}: balanced priority score")
    } else {
        format!("Priority #{rank}: {}", parts.join(", "))
    }
}
