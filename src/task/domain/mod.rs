//! Domain model for task status derivation and lifecycle transitions.
//!
//! The task domain holds the canonical task record, the stored-status state
//! machine, the read-time overdue derivation, and the bucketed
//! classification consumed by every dashboard and kanban view. All
//! infrastructure concerns stay outside the domain boundary; the current
//! instant is always passed in.

pub mod classify;
mod error;
mod ids;
pub mod ordering;
pub mod schedule;
mod status;
mod task;

pub use classify::{BucketCounts, TaskBuckets, classify};
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ProjectId, TaskId, TaskTitle, UserId};
pub use ordering::{SortDirection, SortKey, sort_tasks};
pub use schedule::{effective_status, is_due_today, is_overdue};
pub use status::{EffectiveStatus, Priority, TaskStatus};
pub use task::{Assignee, NewTaskData, PersistedTaskData, Task};
