//! In-memory repository for task lifecycle and classification tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{ProjectId, Task, TaskId, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    project_index: BTreeMap<ProjectId, Vec<TaskId>>,
    assignee_index: BTreeMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_project(state: &mut InMemoryTaskState, task: &Task) {
    state
        .project_index
        .entry(task.project_id())
        .or_default()
        .push(task.id());
}

fn index_assignees(state: &mut InMemoryTaskState, task: &Task) {
    for user_id in task.assignees().keys() {
        state
            .assignee_index
            .entry(*user_id)
            .or_default()
            .push(task.id());
    }
}

/// Removes a task ID from an index bucket, dropping the bucket when empty.
fn remove_from_index<K: Ord>(index: &mut BTreeMap<K, Vec<TaskId>>, key: &K, task_id: TaskId) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

fn collect_by_ids(state: &InMemoryTaskState, ids: Option<&Vec<TaskId>>) -> Vec<Task> {
    ids.map(|ids| {
        ids.iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect()
    })
    .unwrap_or_default()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        index_project(&mut state, task);
        index_assignees(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        // Drop stale assignee entries before re-indexing; the owning
        // project never changes after creation.
        for user_id in old_task.assignees().keys() {
            remove_from_index(&mut state.assignee_index, user_id, task.id());
        }
        index_assignees(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_by_ids(&state, state.project_index.get(&project_id)))
    }

    async fn list_assigned_to(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_by_ids(&state, state.assignee_index.get(&user_id)))
    }
}
