//! MakePledgeHandler - Issues a certificate for a green pledge.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, Percentage, SessionId, Timestamp};
use crate::domain::report::{Certificate, Commitment, CommunityImpact, Pledge, SHARE_TEXT};
use crate::ports::SessionStore;

/// Command to make a pledge.
#[derive(Debug, Clone)]
pub struct MakePledgeCommand {
    pub session_id: SessionId,
    pub name: String,
    pub commitments: Vec<Commitment>,
    pub custom_pledge: Option<String>,
}

/// Result of a successful pledge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MakePledgeResult {
    pub certificate: Certificate,
    pub score: Percentage,
    pub impact: CommunityImpact,
    pub share_text: &'static str,
}

pub struct MakePledgeHandler {
    store: Arc<dyn SessionStore>,
}

impl MakePledgeHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown session
    /// - `EmptyField` / `OutOfRange` for an invalid pledge
    pub async fn handle(&self, cmd: MakePledgeCommand) -> Result<MakePledgeResult, DomainError> {
        let pledge = Pledge::new(&cmd.name, cmd.commitments, cmd.custom_pledge)?;

        let mut session = self.store.load(&cmd.session_id).await?;
        let certificate = session.make_pledge(&pledge, Timestamp::now()).clone();
        self.store.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            pledges_made = session.impact().pledges_made,
            "Pledge certificate issued"
        );

        Ok(MakePledgeResult {
            certificate,
            score: session.score(),
            impact: *session.impact(),
            share_text: SHARE_TEXT,
        })
    }
}
