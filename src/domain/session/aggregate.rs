//! Dashboard session aggregate.
//!
//! One session holds everything a user builds up while using the dashboard:
//! building type, answers, completion, the last certificate and the
//! community impact counters.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, SessionId, Timestamp};
use crate::domain::questionnaire::{AnswerSet, BuildingType, ScoreBreakdown, ScoreCalculator};
use crate::domain::report::{Certificate, CertificateRenderer, CommunityImpact, Pledge};

/// Dashboard session - explicit per-user evaluation context.
///
/// # Invariants
///
/// - `completed` becomes true only through [`submit_answers`](Self::submit_answers)
/// - community impact is credited once, on the first pledge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSession {
    id: SessionId,
    building_type: BuildingType,
    answers: AnswerSet,
    completed: bool,
    certificate: Option<Certificate>,
    impact: CommunityImpact,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DashboardSession {
    pub fn new(id: SessionId, building_type: BuildingType) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            building_type,
            answers: AnswerSet::new(),
            completed: false,
            certificate: None,
            impact: CommunityImpact::default(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn building_type(&self) -> BuildingType {
        self.building_type
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    pub fn impact(&self) -> &CommunityImpact {
        &self.impact
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn score(&self) -> Percentage {
        ScoreCalculator::compute(&self.answers)
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreCalculator::breakdown(&self.answers)
    }

    /// Fails with `QuestionnaireIncomplete` until answers are submitted.
    pub fn ensure_completed(&self) -> Result<(), DomainError> {
        if self.completed {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::QuestionnaireIncomplete,
                "Complete the building evaluation questionnaire first",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_building_type(&mut self, building_type: BuildingType) {
        self.building_type = building_type;
        self.touch();
    }

    /// Applies a batch of answers keyed by question id or text and marks
    /// the questionnaire complete.
    ///
    /// The batch is validated before anything is applied.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if any key is unknown
    pub fn submit_answers<'a, I>(&mut self, answers: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut updated = self.answers.clone();
        for (key, value) in answers {
            updated.set(key, value)?;
        }
        self.answers = updated;
        self.completed = true;
        self.touch();
        Ok(())
    }

    /// Renders a certificate for the pledge and credits community impact
    /// on the first pledge.
    ///
    /// Works on any session; unanswered questions count as "No", so a
    /// session without answers is certified at 0%.
    pub fn make_pledge(&mut self, pledge: &Pledge, issued: Timestamp) -> &Certificate {
        let score = self.score();
        let first_pledge = self.certificate.is_none();
        if first_pledge {
            self.impact.record_pledge(score);
        }
        self.touch();
        let certificate = CertificateRenderer::render(pledge, score, issued);
        self.certificate.insert(certificate)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::Commitment;

    fn session() -> DashboardSession {
        DashboardSession::new(SessionId::new(), BuildingType::default())
    }

    fn pledge(name: &str) -> Pledge {
        Pledge::new(name, [Commitment::Energy], None).unwrap()
    }

    #[test]
    fn new_session_is_incomplete_with_zero_score() {
        let s = session();
        assert!(!s.is_completed());
        assert_eq!(s.score(), Percentage::ZERO);
        assert_eq!(s.building_type(), BuildingType::Home);
        assert!(s.certificate().is_none());
        assert_eq!(s.ensure_completed().unwrap_err().code, ErrorCode::QuestionnaireIncomplete);
    }

    #[test]
    fn submit_answers_marks_completed() {
        let mut s = session();
        s.submit_answers([("energy-1", true), ("waste-1", true)]).unwrap();
        assert!(s.is_completed());
        assert_eq!(s.answers().yes_count(), 2);
    }

    #[test]
    fn submit_answers_is_all_or_nothing() {
        let mut s = session();
        let err = s
            .submit_answers([("energy-1", true), ("Do you own a yacht?", true)])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);
        assert!(!s.is_completed());
        assert_eq!(s.answers().answered_count(), 0);
    }

    #[test]
    fn pledge_without_answers_certifies_zero_score() {
        let mut s = session();
        let cert = s.make_pledge(&pledge("Ada"), Timestamp::now()).clone();

        assert!(cert.svg.contains("Green Building Score: 0%"));
        assert!(!s.is_completed());
        assert_eq!(s.impact().pledges_made, 1);
        assert_eq!(s.impact().co2_reduced, 0.0);
    }

    #[test]
    fn only_first_pledge_credits_impact() {
        let mut s = session();
        let all_yes: Vec<(&str, bool)> = crate::domain::questionnaire::QUESTIONS
            .iter()
            .map(|q| (q.id, true))
            .collect();
        s.submit_answers(all_yes).unwrap();

        s.make_pledge(&pledge("Ada"), Timestamp::now());
        let cert = s.make_pledge(&pledge("Grace"), Timestamp::now()).clone();
        assert!(cert.svg.contains("Grace"));

        assert_eq!(s.impact().pledges_made, 1);
        assert_eq!(s.impact().buildings_improved, 1);
        assert!((s.impact().co2_reduced - 10.0).abs() < 1e-9);
        assert_eq!(
            s.certificate().map(|c| c.file_name.as_str()),
            Some("green_guardian_certificate_grace.svg")
        );
    }

    #[test]
    fn building_type_can_change() {
        let mut s = session();
        s.set_building_type(BuildingType::School);
        assert_eq!(s.building_type(), BuildingType::School);
    }
}
