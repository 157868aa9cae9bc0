//! Session Store Port - Interface for holding dashboard sessions.
//!
//! Sessions are process-lifetime only; adapters decide where they live.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::DashboardSession;

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<SessionStoreError> for DomainError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => {
                DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
                    .with_detail("session_id", id.to_string())
            }
            SessionStoreError::Storage(message) => {
                DomainError::new(ErrorCode::StorageError, message)
            }
        }
    }
}

/// Port for creating, loading and saving dashboard sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a new session.
    async fn insert(&self, session: DashboardSession) -> Result<(), SessionStoreError>;

    /// Loads a session by id.
    ///
    /// # Errors
    /// `NotFound` if no session has that id.
    async fn load(&self, id: &SessionId) -> Result<DashboardSession, SessionStoreError>;

    /// Replaces a stored session.
    ///
    /// # Errors
    /// `NotFound` if the session was never inserted.
    async fn save(&self, session: &DashboardSession) -> Result<(), SessionStoreError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
