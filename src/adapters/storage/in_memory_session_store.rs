//! In-Memory Session Store Adapter
//!
//! Holds dashboard sessions for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::DashboardSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for dashboard sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, DashboardSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: DashboardSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session);
        Ok(())
    }

    async fn load(&self, id: &SessionId) -> Result<DashboardSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(*id))
    }

    async fn save(&self, session: &DashboardSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session.id()) {
            Some(slot) => {
                *slot = session.clone();
                Ok(())
            }
            None => Err(SessionStoreError::NotFound(*session.id())),
        }
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::BuildingType;

    fn session() -> DashboardSession {
        DashboardSession::new(SessionId::new(), BuildingType::Home)
    }

    #[tokio::test]
    async fn insert_then_load() {
        let store = InMemorySessionStore::new();
        let session = session();
        let id = *session.id();

        store.insert(session.clone()).await.unwrap();

        assert_eq!(store.load(&id).await.unwrap(), session);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn load_unknown_is_not_found() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        assert!(matches!(
            store.load(&id).await,
            Err(SessionStoreError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn save_replaces_existing() {
        let store = InMemorySessionStore::new();
        let mut session = session();
        store.insert(session.clone()).await.unwrap();

        session.set_building_type(BuildingType::School);
        store.save(&session).await.unwrap();

        let loaded = store.load(session.id()).await.unwrap();
        assert_eq!(loaded.building_type(), BuildingType::School);
    }

    #[tokio::test]
    async fn save_requires_prior_insert() {
        let store = InMemorySessionStore::new();
        assert!(store.save(&session()).await.is_err());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemorySessionStore::new();
        store.insert(session()).await.unwrap();
        store.insert(session()).await.unwrap();
        store.clear().await;
        assert_eq!(store.count().await, 0);
    }
}
