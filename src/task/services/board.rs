//! Role-scoped board classification for dashboards and kanban views.

use crate::session::{
    domain::Role,
    ports::{SessionError, SessionService},
};
use crate::task::{
    domain::{ProjectId, TaskBuckets, classify},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board classification.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// No user is logged in.
    #[error("no authenticated user")]
    NotAuthenticated,
    /// Session lookup failed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Builds the classified task buckets each dashboard renders.
///
/// Classification itself is pure; this service only decides *which* tasks
/// to classify, based on the authenticated user's role, and stamps the
/// classification instant from the injected clock.
#[derive(Clone)]
pub struct TaskBoardService<R, S, C>
where
    R: TaskRepository,
    S: SessionService,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    session: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> TaskBoardService<R, S, C>
where
    R: TaskRepository,
    S: SessionService,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, session: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            session,
            clock,
        }
    }

    /// Classifies the tasks visible to the authenticated user.
    ///
    /// Admins and project leaders see the full task set; team members see
    /// the tasks assigned to them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotAuthenticated`] when nobody is logged
    /// in, or the underlying session/repository error.
    pub async fn board_for_current_user(&self) -> TaskBoardResult<TaskBuckets> {
        let user = self
            .session
            .current_user()
            .await?
            .ok_or(TaskBoardError::NotAuthenticated)?;

        let tasks = match user.role {
            Role::Admin | Role::ProjectLeader => self.repository.list_all().await?,
            Role::TeamMember => self.repository.list_assigned_to(user.id).await?,
        };
        Ok(classify(&tasks, self.clock.utc()))
    }

    /// Classifies one project's tasks for its kanban board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn project_board(&self, project_id: ProjectId) -> TaskBoardResult<TaskBuckets> {
        let tasks = self.repository.list_by_project(project_id).await?;
        Ok(classify(&tasks, self.clock.utc()))
    }
}
