//! Bucketed task classification for dashboards and kanban columns.

use super::{EffectiveStatus, Task, schedule};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tasks partitioned into the named UI buckets.
///
/// Every classified task lands in exactly one primary bucket (`cancelled`,
/// `completed`, `overdue`, `upcoming`, `todo`). `due_today` is an additional
/// cross-cutting tag: a task due today also appears in its primary bucket.
/// Input order is preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskBuckets {
    /// Not started and not overdue.
    pub todo: Vec<Task>,
    /// In progress and not overdue.
    pub upcoming: Vec<Task>,
    /// Non-terminal with a due date in the past.
    pub overdue: Vec<Task>,
    /// Stored status `Completed`.
    pub completed: Vec<Task>,
    /// Stored status `Cancelled`.
    pub cancelled: Vec<Task>,
    /// Actionable tasks whose due date is the classification date.
    pub due_today: Vec<Task>,
}

impl TaskBuckets {
    /// Returns the number of tasks across the primary buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.todo.len()
            + self.upcoming.len()
            + self.overdue.len()
            + self.completed.len()
            + self.cancelled.len()
    }

    /// Returns whether no tasks were classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns per-bucket sizes for dashboard widgets and column badges.
    #[must_use]
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            todo: self.todo.len(),
            upcoming: self.upcoming.len(),
            overdue: self.overdue.len(),
            completed: self.completed.len(),
            cancelled: self.cancelled.len(),
            due_today: self.due_today.len(),
        }
    }
}

/// Per-bucket task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    /// Size of the `todo` bucket.
    pub todo: usize,
    /// Size of the `upcoming` bucket.
    pub upcoming: usize,
    /// Size of the `overdue` bucket.
    pub overdue: usize,
    /// Size of the `completed` bucket.
    pub completed: usize,
    /// Size of the `cancelled` bucket.
    pub cancelled: usize,
    /// Size of the `due_today` tag.
    pub due_today: usize,
}

/// Classifies tasks into display buckets at the given instant.
///
/// Membership is tested cancelled, then completed, then overdue, then in
/// progress, then to-do, so a cancelled task with a past due date lands in
/// `cancelled` rather than `overdue`. Input tasks are not mutated.
#[must_use]
pub fn classify(tasks: &[Task], now: DateTime<Utc>) -> TaskBuckets {
    let mut buckets = TaskBuckets::default();
    for task in tasks {
        match schedule::effective_status(task, now) {
            EffectiveStatus::Cancelled => buckets.cancelled.push(task.clone()),
            EffectiveStatus::Completed => buckets.completed.push(task.clone()),
            EffectiveStatus::Overdue => buckets.overdue.push(task.clone()),
            EffectiveStatus::InProgress => buckets.upcoming.push(task.clone()),
            EffectiveStatus::ToDo => buckets.todo.push(task.clone()),
        }
        if schedule::is_due_today(task, now) {
            buckets.due_today.push(task.clone());
        }
    }
    buckets
}
