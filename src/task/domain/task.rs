//! Task aggregate root and transition guards.

use super::{
    EffectiveStatus, Priority, ProjectId, TaskDomainError, TaskId, TaskStatus, TaskTitle, UserId,
    schedule,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display information for a user assigned to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Name shown on task cards and lists.
    pub display_name: String,
    /// Contact address, when the backend supplied one.
    pub email: Option<String>,
}

impl Assignee {
    /// Creates an assignee with a display name and no contact address.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: None,
        }
    }

    /// Sets the contact address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Parameter object for creating a fresh task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owning project.
    pub project_id: ProjectId,
    /// Validated display title.
    pub title: TaskTitle,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Scheduling priority.
    pub priority: Priority,
    /// Optional day-granularity due date.
    pub due_date: Option<NaiveDate>,
    /// Users assigned at creation time.
    pub assignees: BTreeMap<UserId, Assignee>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project reference.
    pub project_id: ProjectId,
    /// Persisted display title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted authoritative status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted assignee map.
    pub assignees: BTreeMap<UserId, Assignee>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// The stored status is only ever changed through [`Task::apply_transition`];
/// the derived overdue view never flows back into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<String>,
    priority: Priority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    assignees: BTreeMap<UserId, Assignee>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a fresh task in `ToDo` status, timestamped from the clock.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: TaskStatus::ToDo,
            due_date: data.due_date,
            assignees: data.assignees,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            assignees: data.assignees,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project reference.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the authoritative stored status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the assigned users keyed by user identifier.
    #[must_use]
    pub const fn assignees(&self) -> &BTreeMap<UserId, Assignee> {
        &self.assignees
    }

    /// Returns whether the given user is assigned to this task.
    #[must_use]
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assignees.contains_key(&user_id)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Evaluates the transition guards and returns the stored status the
    /// caller should persist.
    ///
    /// Pure: the task is not mutated and persistence stays with the caller.
    /// Re-requesting the current status is a no-op success. An overdue task
    /// accepts nothing but `Completed` or `Cancelled` — not even its own
    /// stored status — so overdue work cannot re-enter the board without
    /// acknowledgement. Every other request must satisfy the stored state
    /// machine.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the guards reject
    /// the request.
    pub fn request_transition(
        &self,
        target: TaskStatus,
        now: DateTime<Utc>,
    ) -> Result<TaskStatus, TaskDomainError> {
        let from = schedule::effective_status(self, now);
        let rejected = Err(TaskDomainError::InvalidTransition {
            task_id: self.id,
            from,
            to: target,
        });

        if self.status.is_terminal() {
            if target == self.status {
                return Ok(self.status);
            }
            return rejected;
        }
        if from == EffectiveStatus::Overdue {
            return match target {
                TaskStatus::Completed | TaskStatus::Cancelled => Ok(target),
                TaskStatus::ToDo | TaskStatus::InProgress => rejected,
            };
        }
        if target == self.status {
            return Ok(self.status);
        }
        if self.status.can_transition_to(target) {
            return Ok(target);
        }
        rejected
    }

    /// Applies a guarded transition, updating the stored status and the
    /// mutation timestamp when the outcome differs from the current status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the guards reject
    /// the request; the task is left untouched.
    pub fn apply_transition(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let new_status = self.request_transition(target, clock.utc())?;
        if new_status != self.status {
            self.status = new_status;
            self.touch(clock);
        }
        Ok(new_status)
    }

    /// Assigns a user, replacing any previous display info for the same id.
    pub fn assign(&mut self, user_id: UserId, assignee: Assignee, clock: &impl Clock) {
        self.assignees.insert(user_id, assignee);
        self.touch(clock);
    }

    /// Removes a user assignment. Unknown ids are ignored.
    pub fn unassign(&mut self, user_id: UserId, clock: &impl Clock) {
        if self.assignees.remove(&user_id).is_some() {
            self.touch(clock);
        }
    }

    /// Replaces the due date.
    pub fn reschedule(&mut self, due_date: Option<NaiveDate>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
