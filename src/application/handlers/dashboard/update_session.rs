//! Command handlers that change a session's building type or answers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::BuildingType;
use crate::domain::session::DashboardSession;
use crate::ports::SessionStore;

/// Command to change the building type used for tips and report titles.
#[derive(Debug, Clone)]
pub struct SetBuildingTypeCommand {
    pub session_id: SessionId,
    pub building_type: BuildingType,
}

pub struct SetBuildingTypeHandler {
    store: Arc<dyn SessionStore>,
}

impl SetBuildingTypeHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetBuildingTypeCommand) -> Result<DashboardSession, DomainError> {
        let mut session = self.store.load(&cmd.session_id).await?;
        session.set_building_type(cmd.building_type);
        self.store.save(&session).await?;
        Ok(session)
    }
}

/// Command to submit questionnaire answers, keyed by question id or text.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub session_id: SessionId,
    pub answers: Vec<(String, bool)>,
}

pub struct SubmitAnswersHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitAnswersHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Applies the answers and marks the questionnaire complete.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown session
    /// - `QuestionNotFound` if any key is unknown; nothing is applied
    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<DashboardSession, DomainError> {
        let mut session = self.store.load(&cmd.session_id).await?;
        session.submit_answers(cmd.answers.iter().map(|(key, value)| (key.as_str(), *value)))?;
        self.store.save(&session).await?;

        tracing::debug!(
            session_id = %session.id(),
            answered = session.answers().answered_count(),
            score = session.score().value(),
            "Answers submitted"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::questionnaire::QUESTIONS;

    async fn setup() -> (Arc<InMemorySessionStore>, SessionId) {
        let store = Arc::new(InMemorySessionStore::new());
        let session = DashboardSession::new(SessionId::new(), BuildingType::Home);
        let id = *session.id();
        store.insert(session).await.unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn set_building_type_persists() {
        let (store, id) = setup().await;
        let handler = SetBuildingTypeHandler::new(store.clone());

        handler
            .handle(SetBuildingTypeCommand {
                session_id: id,
                building_type: BuildingType::Office,
            })
            .await
            .unwrap();

        assert_eq!(store.load(&id).await.unwrap().building_type(), BuildingType::Office);
    }

    #[tokio::test]
    async fn all_yes_scores_one_hundred() {
        let (store, id) = setup().await;
        let handler = SubmitAnswersHandler::new(store.clone());

        let session = handler
            .handle(SubmitAnswersCommand {
                session_id: id,
                answers: QUESTIONS.iter().map(|q| (q.id.to_string(), true)).collect(),
            })
            .await
            .unwrap();

        assert!(session.is_completed());
        assert_eq!(session.score().value(), 100);
        assert!(store.load(&id).await.unwrap().is_completed());
    }

    #[tokio::test]
    async fn accepts_question_text_as_key() {
        let (store, id) = setup().await;
        let handler = SubmitAnswersHandler::new(store);

        let session = handler
            .handle(SubmitAnswersCommand {
                session_id: id,
                answers: vec![(QUESTIONS[0].text.to_string(), true)],
            })
            .await
            .unwrap();

        assert_eq!(session.answers().yes_count(), 1);
    }

    #[tokio::test]
    async fn unknown_question_leaves_session_untouched() {
        let (store, id) = setup().await;
        let handler = SubmitAnswersHandler::new(store.clone());

        let err = handler
            .handle(SubmitAnswersCommand {
                session_id: id,
                answers: vec![("energy-1".into(), true), ("bogus".into(), true)],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::QuestionNotFound);
        let stored = store.load(&id).await.unwrap();
        assert!(!stored.is_completed());
        assert_eq!(stored.answers().answered_count(), 0);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let err = SubmitAnswersHandler::new(store)
            .handle(SubmitAnswersCommand {
                session_id: SessionId::new(),
                answers: vec![],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }
}
