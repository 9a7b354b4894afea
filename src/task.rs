//! Task input record.
//!
//! [`Task`] is the caller-owned representation the engine scores. The engine
//! never mutates or stores tasks; ranking returns fresh copies augmented
//! with score fields.
//!
//! # Field leniency
//!
//! Malformed input must degrade to neutral scores rather than fail, so the
//! optional fields model "absent or unparseable" directly: a due date stays
//! textual (parsed during urgency scoring), and numeric fields that could
//! not be decoded arrive as `None`.

use chrono::NaiveDate;

/// A single task submitted for prioritization.
///
/// # Dependency references
///
/// `dependencies` entries are **1-based positions into the submitted
/// batch**, not persistent task identifiers. A value `p` means "the task at
/// position `p` of this exact submission order". References are only
/// meaningful within one batch; values outside `1..=batch_len` are inert.
///
/// # Examples
///
/// ```
/// use taskrank::task::Task;
///
/// let task = Task::new("Fix critical login bug")
///     .with_due_date_text("2025-07-01")
///     .with_estimated_hours(4.0)
///     .with_importance(9);
/// assert!(task.dependencies.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Short description of the task.
    pub title: String,

    /// Due date as ISO `YYYY-MM-DD` text, if any.
    ///
    /// Kept textual so unparseable dates reach the scorer (and score
    /// neutrally) instead of failing upstream decoding.
    #[cfg_attr(feature = "serde", serde(default))]
    pub due_date: Option<String>,

    /// Estimated effort in hours. `None` = absent or unparseable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_hours: Option<f64>,

    /// Importance on a nominal 1-10 scale. `None` = absent or unparseable.
    ///
    /// Out-of-range values are clamped during scoring, not rejected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub importance: Option<i64>,

    /// 1-based positions of the tasks this task depends on.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dependencies: Vec<usize>,
}

impl Task {
    /// Creates a task with the given title and every other field empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the due date from a typed calendar date (stored as ISO text).
    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due.to_string());
        self
    }

    /// Sets the due date from raw text, parsed later during scoring.
    pub fn with_due_date_text(mut self, raw: impl Into<String>) -> Self {
        self.due_date = Some(raw.into());
        self
    }

    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<usize>) -> Self {
        self.dependencies = dependencies;
        self
    }
}
