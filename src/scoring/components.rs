//! The four component scoring functions.

use chrono::NaiveDate;

use crate::task::Task;

/// Fallback score for absent or unparseable fields.
///
/// Chosen as the midpoint so a missing field neither promotes nor demotes
/// a task relative to its other components.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Scores how urgent a task is from its due date.
///
/// `due_date` is ISO `YYYY-MM-DD` text; `today` is the caller's reference
/// date. The calendar-day distance maps onto fixed thresholds, checked in
/// ascending order:
///
/// | days until due | score |
/// |----------------|-------|
/// | `< 0` (overdue)| 1.0   |
/// | `0`            | 0.9   |
/// | `1`            | 0.8   |
/// | `2..=3`        | 0.6   |
/// | `4..=7`        | 0.4   |
/// | `> 7`          | 0.2   |
///
/// Absent or unparseable dates score [`NEUTRAL_SCORE`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskrank::scoring::urgency_score;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// assert_eq!(urgency_score(Some("2025-06-14"), today), 1.0);
/// assert_eq!(urgency_score(Some("2025-06-15"), today), 0.9);
/// assert_eq!(urgency_score(None, today), 0.5);
/// ```
pub fn urgency_score(due_date: Option<&str>, today: NaiveDate) -> f64 {
    let raw = match due_date {
        Some(raw) => raw,
        None => return NEUTRAL_SCORE,
    };
    let due = match raw.parse::<NaiveDate>() {
        Ok(due) => due,
        Err(_) => return NEUTRAL_SCORE,
    };

    let days_until_due = (due - today).num_days();
    if days_until_due < 0 {
        1.0
    } else if days_until_due == 0 {
        0.9
    } else if days_until_due <= 1 {
        0.8
    } else if days_until_due <= 3 {
        0.6
    } else if days_until_due <= 7 {
        0.4
    } else {
        0.2
    }
}

/// Scores declared importance: `clamp(value / 10, 0.1, 1.0)`.
///
/// Values outside the nominal 1-10 scale are clamped rather than rejected;
/// `None` scores [`NEUTRAL_SCORE`].
pub fn importance_score(importance: Option<i64>) -> f64 {
    match importance {
        Some(value) => (value as f64 / 10.0).clamp(0.1, 1.0),
        None => NEUTRAL_SCORE,
    }
}

/// Scores estimated effort, favoring quick wins.
///
/// Bucket thresholds (hours): `<=1`→1.0, `<=4`→0.7, `<=8`→0.4, `>8`→0.2.
/// There is no positivity check; a non-positive estimate lands in the
/// `<=1` bucket. `None` scores [`NEUTRAL_SCORE`].
pub fn effort_score(estimated_hours: Option<f64>) -> f64 {
    let hours = match estimated_hours {
        Some(hours) => hours,
        None => return NEUTRAL_SCORE,
    };
    if hours <= 1.0 {
        1.0
    } else if hours <= 4.0 {
        0.7
    } else if hours <= 8.0 {
        0.4
    } else {
        0.2
    }
}

/// Scores the dependency role of the task at `position` (1-based).
///
/// A task with no dependencies of its own scores [`NEUTRAL_SCORE`], even
/// when other tasks depend on it. Otherwise the score is 1.0 when at least
/// one *other* task lists `position` among its dependencies (this task
/// blocks work), and 0.3 when none does. Self-references never count as
/// blocking. Positions outside the batch score [`NEUTRAL_SCORE`].
///
/// Requires the whole batch: blocking status cannot be derived from the
/// task alone.
pub fn dependency_score(position: usize, tasks: &[Task]) -> f64 {
    let task = match position.checked_sub(1).and_then(|index| tasks.get(index)) {
        Some(task) => task,
        None => return NEUTRAL_SCORE,
    };
    if task.dependencies.is_empty() {
        return NEUTRAL_SCORE;
    }

    let blocks_another = tasks
        .iter()
        .enumerate()
        .any(|(index, other)| index + 1 != position && other.dependencies.contains(&position));
    if blocks_another {
        1.0
    } else {
        0.3
    }
}
