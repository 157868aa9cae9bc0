//! Data Transfer Objects for dashboard endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::MakePledgeResult;
use crate::domain::foundation::{Percentage, Timestamp};
use crate::domain::questionnaire::{
    BuildingType, Catalog, Category, CategoryScore, ScoreBand, CRITICAL_PENALTY,
};
use crate::domain::report::{Commitment, CommunityImpact};
use crate::domain::session::DashboardSession;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub building_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetBuildingTypeRequest {
    pub building_type: String,
}

/// Answers keyed by question id or question text.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PledgeRequest {
    pub name: String,
    #[serde(default)]
    pub commitments: Vec<Commitment>,
    #[serde(default)]
    pub custom_pledge: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialsQuery {
    #[serde(rename = "type", default)]
    pub material_type: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub critical: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub category: Category,
    pub name: String,
    pub icon: String,
    pub weight: f64,
    pub questions: Vec<QuestionView>,
}

/// The questionnaire as presented to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub total_questions: usize,
    pub critical_penalty: u8,
    pub categories: Vec<CategoryView>,
}

impl QuestionnaireResponse {
    pub fn from_catalog() -> Self {
        Self {
            total_questions: Catalog::len(),
            critical_penalty: CRITICAL_PENALTY,
            categories: Category::ALL
                .iter()
                .map(|category| CategoryView {
                    category: *category,
                    name: category.name().to_string(),
                    icon: category.icon().to_string(),
                    weight: category.weight(),
                    questions: category
                        .questions()
                        .map(|q| QuestionView {
                            id: q.id.to_string(),
                            text: q.text.to_string(),
                            critical: q.critical,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Quick stats shown beside the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    pub answered: usize,
    pub yes: usize,
    pub total: usize,
}

impl QuickStats {
    fn of(session: &DashboardSession) -> Self {
        Self {
            answered: session.answers().answered_count(),
            yes: session.answers().yes_count(),
            total: Catalog::len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub building_type: BuildingType,
    pub completed: bool,
    pub stats: QuickStats,
    pub score: Percentage,
    pub band: ScoreBand,
    pub impact: CommunityImpact,
    pub has_certificate: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&DashboardSession> for SessionResponse {
    fn from(session: &DashboardSession) -> Self {
        let score = session.score();
        Self {
            id: session.id().to_string(),
            building_type: session.building_type(),
            completed: session.is_completed(),
            stats: QuickStats::of(session),
            score,
            band: ScoreBand::for_score(score),
            impact: *session.impact(),
            has_certificate: session.certificate().is_some(),
            created_at: *session.created_at(),
            updated_at: *session.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub session_id: String,
    pub completed: bool,
    pub score: Percentage,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub band_emoji: &'static str,
    pub raw: u8,
    pub penalty: u8,
    pub categories: Vec<CategoryScore>,
    pub stats: QuickStats,
}

impl From<&DashboardSession> for ScoreResponse {
    fn from(session: &DashboardSession) -> Self {
        let breakdown = session.breakdown();
        Self {
            session_id: session.id().to_string(),
            completed: session.is_completed(),
            score: breakdown.score,
            band: breakdown.band,
            band_label: breakdown.band.label(),
            band_emoji: breakdown.band.emoji(),
            raw: breakdown.raw,
            penalty: breakdown.penalty,
            categories: breakdown.categories,
            stats: QuickStats::of(session),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateResponse {
    pub file_name: String,
    pub png_file_name: String,
    pub content_type: &'static str,
    pub svg: String,
    pub issued_on: String,
    pub download_url: String,
    pub score: Percentage,
    pub impact: CommunityImpact,
    pub share_text: &'static str,
}

impl CertificateResponse {
    pub fn new(session_id: &str, result: MakePledgeResult) -> Self {
        let png_file_name = result
            .certificate
            .file_name
            .strip_suffix(".svg")
            .map(|stem| format!("{}.png", stem))
            .unwrap_or_else(|| format!("{}.png", result.certificate.file_name));

        Self {
            file_name: result.certificate.file_name,
            png_file_name,
            content_type: result.certificate.content_type,
            svg: result.certificate.svg,
            issued_on: result.certificate.issued_on,
            download_url: format!("/api/dashboard/sessions/{}/certificate.svg", session_id),
            score: result.score,
            impact: result.impact,
            share_text: result.share_text,
        }
    }
}
