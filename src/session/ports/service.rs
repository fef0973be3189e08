//! Session-service port.
//!
//! The host applications kept tokens and the current user in ambient
//! browser storage; here callers receive session state through an explicit
//! injected interface instead.

use crate::session::domain::SessionUser;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Process-wide session state with a login/logout lifecycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Returns the authenticated user, or `None` when nobody is logged in.
    async fn current_user(&self) -> SessionResult<Option<SessionUser>>;

    /// Establishes a session, replacing any existing one.
    async fn login(&self, user: SessionUser) -> SessionResult<()>;

    /// Ends the session. A no-op when nobody is logged in.
    async fn logout(&self) -> SessionResult<()>;
}

/// Errors returned by session-service implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Session-storage failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
