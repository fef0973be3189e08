//! In-memory session adapter.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::session::{
    domain::SessionUser,
    ports::{SessionError, SessionResult, SessionService},
};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionService {
    current: Arc<RwLock<Option<SessionUser>>>,
}

impl InMemorySessionService {
    /// Creates a store with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with an established session, for tests.
    #[must_use]
    pub fn with_user(user: SessionUser) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(user))),
        }
    }
}

#[async_trait]
impl SessionService for InMemorySessionService {
    async fn current_user(&self) -> SessionResult<Option<SessionUser>> {
        let current = self
            .current
            .read()
            .map_err(|err| SessionError::storage(std::io::Error::other(err.to_string())))?;
        Ok(current.clone())
    }

    async fn login(&self, user: SessionUser) -> SessionResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|err| SessionError::storage(std::io::Error::other(err.to_string())))?;
        *current = Some(user);
        Ok(())
    }

    async fn logout(&self) -> SessionResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|err| SessionError::storage(std::io::Error::other(err.to_string())))?;
        *current = None;
        Ok(())
    }
}
