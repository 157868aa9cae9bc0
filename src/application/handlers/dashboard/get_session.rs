//! GetSessionHandler - Query handler for a dashboard session and its certificate.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::report::Certificate;
use crate::domain::session::DashboardSession;
use crate::ports::SessionStore;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving sessions.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<DashboardSession, DomainError> {
        Ok(self.store.load(&query.session_id).await?)
    }

    /// Last certificate issued for the session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown session
    /// - `CertificateMissing` if no pledge has been made
    pub async fn certificate(&self, query: GetSessionQuery) -> Result<Certificate, DomainError> {
        let session = self.handle(query).await?;
        session.certificate().cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::CertificateMissing,
                "No certificate has been generated for this session",
            )
        })
    }
}
