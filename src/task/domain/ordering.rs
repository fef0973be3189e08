//! Client-side sorting for task list views.

use super::Task;
use std::cmp::Ordering;

/// Column a task list is sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive title order.
    Title,
    /// Priority order, `Low` first when ascending.
    Priority,
    /// Due date order; tasks without a due date sort last in both
    /// directions.
    DueDate,
    /// Stored status in lifecycle order.
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sorts tasks in place by the given column. The sort is stable, so equal
/// keys keep their fetch order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey, direction: SortDirection) {
    tasks.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare(a: &Task, b: &Task, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::Title => direction.apply(
            a.title()
                .as_str()
                .to_lowercase()
                .cmp(&b.title().as_str().to_lowercase()),
        ),
        SortKey::Priority => direction.apply(a.priority().cmp(&b.priority())),
        // Direction applies to dated tasks only; unscheduled ones trail the
        // list either way.
        SortKey::DueDate => match (a.due_date(), b.due_date()) {
            (Some(left), Some(right)) => direction.apply(left.cmp(&right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Status => direction.apply(status_rank(a).cmp(&status_rank(b))),
    }
}

const fn status_rank(task: &Task) -> u8 {
    match task.status() {
        super::TaskStatus::ToDo => 0,
        super::TaskStatus::InProgress => 1,
        super::TaskStatus::Completed => 2,
        super::TaskStatus::Cancelled => 3,
    }
}
