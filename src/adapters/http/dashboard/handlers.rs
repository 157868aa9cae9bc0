//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ApiError;
use crate::application::{
    CreateSessionCommand, CreateSessionHandler, GetReportHandler, GetReportQuery,
    GetSessionHandler, GetSessionQuery, GetTipsHandler, GetTipsQuery, MakePledgeCommand,
    MakePledgeHandler, SetBuildingTypeCommand, SetBuildingTypeHandler, SubmitAnswersCommand,
    SubmitAnswersHandler, TipsView,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::materials::{MaterialCatalog, MaterialComparison, MaterialFilter, SortKey};
use crate::domain::questionnaire::BuildingType;
use crate::domain::report::InfographicReport;
use crate::ports::SessionStore;

use super::dto::{
    CertificateResponse, CreateSessionRequest, MaterialsQuery, PledgeRequest,
    QuestionnaireResponse, ScoreResponse, SessionResponse, SetBuildingTypeRequest,
    SubmitAnswersRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for dashboard routes.
#[derive(Clone)]
pub struct DashboardAppState {
    pub store: Arc<dyn SessionStore>,
}

impl DashboardAppState {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.store.clone())
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.store.clone())
    }

    pub fn set_building_type_handler(&self) -> SetBuildingTypeHandler {
        SetBuildingTypeHandler::new(self.store.clone())
    }

    pub fn submit_answers_handler(&self) -> SubmitAnswersHandler {
        SubmitAnswersHandler::new(self.store.clone())
    }

    pub fn get_tips_handler(&self) -> GetTipsHandler {
        GetTipsHandler::new(self.store.clone())
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.store.clone())
    }

    pub fn make_pledge_handler(&self) -> MakePledgeHandler {
        MakePledgeHandler::new(self.store.clone())
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::bad_request(ErrorCode::InvalidFormat, "Invalid session ID format")
    })
}

fn parse_building_type(raw: &str) -> Result<BuildingType, ApiError> {
    raw.parse::<BuildingType>()
        .map_err(|e| ApiError::from(DomainError::from(e)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Catalog Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/dashboard/questionnaire
pub async fn get_questionnaire() -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse::from_catalog())
}

/// GET /api/dashboard/materials?type=&sort_by=
pub async fn compare_materials(
    Query(params): Query<MaterialsQuery>,
) -> Result<Json<MaterialComparison>, ApiError> {
    let filter: MaterialFilter = params
        .material_type
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e| ApiError::from(DomainError::from(e)))?;
    let sort_by: SortKey = params
        .sort_by
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e| ApiError::from(DomainError::from(e)))?;

    Ok(Json(MaterialCatalog::compare_materials(filter, sort_by)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Session Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/dashboard/sessions
pub async fn create_session(
    State(state): State<DashboardAppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    let building_type = match request.building_type.as_deref() {
        Some(raw) => parse_building_type(raw)?,
        None => BuildingType::default(),
    };

    let session = state
        .create_session_handler()
        .handle(CreateSessionCommand { building_type })
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(&session))))
}

/// GET /api/dashboard/sessions/:id
pub async fn get_session(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .get_session_handler()
        .handle(GetSessionQuery { session_id })
        .await?;
    Ok(Json(SessionResponse::from(&session)))
}

/// PUT /api/dashboard/sessions/:id/building-type
pub async fn set_building_type(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
    Json(request): Json<SetBuildingTypeRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let cmd = SetBuildingTypeCommand {
        session_id: parse_session_id(&id)?,
        building_type: parse_building_type(&request.building_type)?,
    };
    let session = state.set_building_type_handler().handle(cmd).await?;
    Ok(Json(SessionResponse::from(&session)))
}

/// PUT /api/dashboard/sessions/:id/answers
pub async fn submit_answers(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitAnswersRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let cmd = SubmitAnswersCommand {
        session_id: parse_session_id(&id)?,
        answers: request.answers.into_iter().collect(),
    };
    let session = state.submit_answers_handler().handle(cmd).await?;
    Ok(Json(ScoreResponse::from(&session)))
}

/// GET /api/dashboard/sessions/:id/score
pub async fn get_score(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .get_session_handler()
        .handle(GetSessionQuery { session_id })
        .await?;
    Ok(Json(ScoreResponse::from(&session)))
}

/// GET /api/dashboard/sessions/:id/tips
pub async fn get_tips(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
) -> Result<Json<TipsView>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let view = state
        .get_tips_handler()
        .handle(GetTipsQuery { session_id })
        .await?;
    Ok(Json(view))
}

/// GET /api/dashboard/sessions/:id/report
pub async fn get_report(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
) -> Result<Json<InfographicReport>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let report = state
        .get_report_handler()
        .handle(GetReportQuery { session_id })
        .await?;
    Ok(Json(report))
}

/// POST /api/dashboard/sessions/:id/pledge
pub async fn make_pledge(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
    Json(request): Json<PledgeRequest>,
) -> Result<Json<CertificateResponse>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let cmd = MakePledgeCommand {
        session_id,
        name: request.name,
        commitments: request.commitments,
        custom_pledge: request.custom_pledge,
    };
    let result = state.make_pledge_handler().handle(cmd).await?;
    Ok(Json(CertificateResponse::new(&session_id.to_string(), result)))
}

/// GET /api/dashboard/sessions/:id/certificate.svg
pub async fn download_certificate(
    State(state): State<DashboardAppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let session_id = parse_session_id(&id)?;
    let certificate = state
        .get_session_handler()
        .certificate(GetSessionQuery { session_id })
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", certificate.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, certificate.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        certificate.svg,
    )
        .into_response())
}
