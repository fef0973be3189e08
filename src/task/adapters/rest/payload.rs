//! Normalisation of REST task payloads into the canonical task record.
//!
//! The three Hive front-end variants disagree on field names (`status` vs
//! `taskStatus`, `title` vs `taskName`) and on stored-status spellings. The
//! payload shape here accepts all of them and [`normalize`] resolves the
//! differences immediately on fetch, so the rest of the crate only ever
//! sees one canonical [`Task`].

use crate::task::domain::{
    Assignee, PersistedTaskData, Priority, ProjectId, Task, TaskId, TaskStatus, TaskTitle, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Loosely-structured task record as delivered by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task identifier (`id` or legacy `taskId`).
    #[serde(default, alias = "taskId")]
    pub id: Option<Uuid>,
    /// Display title (`title` or legacy `taskName`).
    #[serde(default, alias = "taskName")]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Priority string in whatever casing the variant used.
    #[serde(default)]
    pub priority: Option<String>,
    /// Stored status string (`status` or legacy `taskStatus`).
    #[serde(default, alias = "taskStatus")]
    pub status: Option<String>,
    /// Due date as `YYYY-MM-DD` or an RFC 3339 date-time.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Owning project identifier.
    #[serde(default)]
    pub project_id: Option<Uuid>,
    /// Assigned users keyed by user identifier.
    #[serde(default)]
    pub assigned_users: BTreeMap<Uuid, AssigneePayload>,
    /// Creation timestamp, when the backend supplied one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Latest mutation timestamp, when the backend supplied one.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Assigned-user display info as delivered by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneePayload {
    /// Display name (`displayName` or legacy `username`).
    #[serde(default, alias = "username")]
    pub display_name: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
}

/// A canonical task plus the liberties taken while normalising it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTask {
    /// The canonical task record.
    pub task: Task,
    /// Fallbacks applied during normalisation, in field order.
    pub notes: Vec<NormalizationNote>,
}

/// A documented fallback applied while normalising a payload.
///
/// Notes are surfaced to callers rather than swallowed so the UI (or a
/// sync job) can react to backend drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationNote {
    /// The stored status string was not recognised; the task was defaulted
    /// to `TO_DO`.
    UnknownStatus {
        /// The string the backend sent.
        raw: String,
    },
    /// The backend persisted a derived `OVERDUE` status. Overdue is
    /// derived-only here, so the task was reset to `TO_DO`; the real
    /// overdue view is recomputed from the due date.
    LegacyOverdueStatus,
    /// No priority was supplied; defaulted to `MEDIUM`.
    MissingPriority,
    /// The priority string was not recognised; defaulted to `MEDIUM`.
    UnknownPriority {
        /// The string the backend sent.
        raw: String,
    },
}

/// Errors returned when a payload cannot be normalised at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedTaskError {
    /// A required field was absent.
    #[error("task payload is missing required field `{0}`")]
    MissingField(&'static str),

    /// The title was empty after trimming.
    #[error("task payload title must not be empty")]
    EmptyTitle,

    /// The due date could not be parsed as a date or RFC 3339 date-time.
    #[error("task payload has invalid due date: {0}")]
    InvalidDueDate(String),
}

/// Normalises one payload into the canonical task record.
///
/// Missing `id`, `projectId`, `title`, or `status` fields fail fast;
/// unknown status and priority *values* fall back with a
/// [`NormalizationNote`] and a `warn!` event instead. Missing timestamps
/// default to the clock's current instant.
///
/// # Errors
///
/// Returns [`MalformedTaskError`] when a required field is absent, the
/// title is blank, or the due date is unparseable.
pub fn normalize(
    payload: TaskPayload,
    clock: &impl Clock,
) -> Result<NormalizedTask, MalformedTaskError> {
    let mut notes = Vec::new();

    let id = payload
        .id
        .map(TaskId::from_uuid)
        .ok_or(MalformedTaskError::MissingField("id"))?;
    let project_id = payload
        .project_id
        .map(ProjectId::from_uuid)
        .ok_or(MalformedTaskError::MissingField("projectId"))?;
    let title = payload
        .title
        .ok_or(MalformedTaskError::MissingField("title"))
        .and_then(|raw| TaskTitle::new(raw).map_err(|_| MalformedTaskError::EmptyTitle))?;

    let raw_status = payload
        .status
        .ok_or(MalformedTaskError::MissingField("status"))?;
    let status = resolve_status(id, &raw_status, &mut notes);
    let priority = resolve_priority(id, payload.priority, &mut notes);

    let due_date = payload.due_date.map(|raw| parse_due_date(&raw)).transpose()?;

    let assignees = payload
        .assigned_users
        .into_iter()
        .map(|(user_id, assignee)| (UserId::from_uuid(user_id), resolve_assignee(assignee)))
        .collect();

    let fetched_at = clock.utc();
    let task = Task::from_persisted(PersistedTaskData {
        id,
        project_id,
        title,
        description: payload.description.filter(|text| !text.trim().is_empty()),
        priority,
        status,
        due_date,
        assignees,
        created_at: payload.created_at.unwrap_or(fetched_at),
        updated_at: payload.updated_at.unwrap_or(fetched_at),
    });

    Ok(NormalizedTask { task, notes })
}

/// Normalises a fetched task collection, failing on the first malformed
/// record.
///
/// # Errors
///
/// Returns the first [`MalformedTaskError`] encountered.
pub fn normalize_batch(
    payloads: impl IntoIterator<Item = TaskPayload>,
    clock: &impl Clock,
) -> Result<Vec<NormalizedTask>, MalformedTaskError> {
    payloads
        .into_iter()
        .map(|payload| normalize(payload, clock))
        .collect()
}

fn resolve_status(id: TaskId, raw: &str, notes: &mut Vec<NormalizationNote>) -> TaskStatus {
    TaskStatus::try_from(raw).unwrap_or_else(|_| {
        if raw.trim().eq_ignore_ascii_case("overdue") {
            warn!(task_id = %id, "persisted OVERDUE status normalised to TO_DO");
            notes.push(NormalizationNote::LegacyOverdueStatus);
        } else {
            warn!(task_id = %id, raw, "unknown stored status, defaulting to TO_DO");
            notes.push(NormalizationNote::UnknownStatus {
                raw: raw.to_owned(),
            });
        }
        TaskStatus::ToDo
    })
}

fn resolve_priority(
    id: TaskId,
    raw: Option<String>,
    notes: &mut Vec<NormalizationNote>,
) -> Priority {
    let Some(value) = raw else {
        notes.push(NormalizationNote::MissingPriority);
        return Priority::default();
    };
    Priority::try_from(value.as_str()).unwrap_or_else(|_| {
        warn!(task_id = %id, raw = %value, "unknown priority, defaulting to MEDIUM");
        notes.push(NormalizationNote::UnknownPriority { raw: value });
        Priority::default()
    })
}

fn resolve_assignee(payload: AssigneePayload) -> Assignee {
    Assignee {
        display_name: payload
            .display_name
            .or_else(|| payload.email.clone())
            .unwrap_or_else(|| "unknown user".to_owned()),
        email: payload.email,
    }
}

fn parse_due_date(raw: &str) -> Result<NaiveDate, MalformedTaskError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.date_naive())
        .map_err(|_| MalformedTaskError::InvalidDueDate(raw.to_owned()))
}
