//! Read-time status derivation over the stored status and the due date.
//!
//! Everything here is a pure function of a task and an explicit `now`; the
//! calling layer owns re-invocation on refresh, so derivation stays
//! reproducible under test.

use super::{EffectiveStatus, Task};
use chrono::{DateTime, Utc};

/// Returns whether the task's due date has passed without the task reaching
/// a terminal status.
///
/// Due dates carry day granularity with end-of-day semantics: a task due
/// today is not overdue until the day is over. Tasks without a due date are
/// never overdue.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.status().is_terminal()
        && task
            .due_date()
            .is_some_and(|due_date| due_date < now.date_naive())
}

/// Derives the display status for a task at the given instant.
///
/// Terminal stored statuses win outright, then overdue derivation, then the
/// stored status as-is.
#[must_use]
pub fn effective_status(task: &Task, now: DateTime<Utc>) -> EffectiveStatus {
    if task.status().is_terminal() {
        return EffectiveStatus::from(task.status());
    }
    if is_overdue(task, now) {
        return EffectiveStatus::Overdue;
    }
    EffectiveStatus::from(task.status())
}

/// Returns whether the task is due on `now`'s date and still actionable.
///
/// This is the cross-cutting `due_today` tag: it overlaps the primary
/// classification buckets but excludes terminal tasks.
#[must_use]
pub fn is_due_today(task: &Task, now: DateTime<Utc>) -> bool {
    !task.status().is_terminal()
        && task
            .due_date()
            .is_some_and(|due_date| due_date == now.date_naive())
}
