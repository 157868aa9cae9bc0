//! CreateSessionHandler - Command handler for starting a dashboard session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::BuildingType;
use crate::domain::session::DashboardSession;
use crate::ports::SessionStore;

/// Command to create a new session.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionCommand {
    pub building_type: BuildingType,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<DashboardSession, DomainError> {
        let session = DashboardSession::new(SessionId::new(), cmd.building_type);
        self.store.insert(session.clone()).await?;

        tracing::info!(
            session_id = %session.id(),
            building_type = session.building_type().label(),
            "Dashboard session created"
        );
        Ok(session)
    }
}
