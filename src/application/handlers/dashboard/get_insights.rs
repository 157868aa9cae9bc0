//! Query handlers for the improvement tips and the infographic report.
//!
//! Both require a completed questionnaire.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, Percentage, SessionId};
use crate::domain::questionnaire::{
    recommendations, BuildingType, CategoryRecommendations, ScoreBand, GENERAL_TIPS,
    INNOVATION_TIPS, MAINTENANCE_TIPS,
};
use crate::domain::report::{InfographicBuilder, InfographicReport};
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
pub struct GetTipsQuery {
    pub session_id: SessionId,
}

/// Everything the tips page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsView {
    pub building_type: BuildingType,
    pub score: Percentage,
    pub band: ScoreBand,
    pub missed_count: usize,
    pub recommendations: Vec<CategoryRecommendations>,
    pub general_tips: &'static [&'static str],
    pub maintenance_tips: &'static [&'static str],
    pub innovation_tips: &'static [&'static str],
}

pub struct GetTipsHandler {
    store: Arc<dyn SessionStore>,
}

impl GetTipsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetTipsQuery) -> Result<TipsView, DomainError> {
        let session = self.store.load(&query.session_id).await?;
        session.ensure_completed()?;

        let score = session.score();
        let grouped = recommendations(session.answers(), session.building_type());
        Ok(TipsView {
            building_type: session.building_type(),
            score,
            band: ScoreBand::for_score(score),
            missed_count: grouped.iter().map(|c| c.recommendations.len()).sum(),
            recommendations: grouped,
            general_tips: &GENERAL_TIPS,
            maintenance_tips: &MAINTENANCE_TIPS,
            innovation_tips: &INNOVATION_TIPS,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub session_id: SessionId,
}

pub struct GetReportHandler {
    store: Arc<dyn SessionStore>,
}

impl GetReportHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<InfographicReport, DomainError> {
        let session = self.store.load(&query.session_id).await?;
        session.ensure_completed()?;
        Ok(InfographicBuilder::build(session.answers(), session.building_type()))
    }
}
