//! HTTP routes for dashboard endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    compare_materials, create_session, download_certificate, get_questionnaire, get_report,
    get_score, get_session, get_tips, make_pledge, set_building_type, submit_answers,
    DashboardAppState,
};

/// Creates the dashboard router.
///
/// Routes:
/// - `GET /api/dashboard/questionnaire` - Question catalog
/// - `GET /api/dashboard/materials` - Material comparison
/// - `POST /api/dashboard/sessions` - Start a session
/// - `GET /api/dashboard/sessions/:id` - Session summary
/// - `PUT /api/dashboard/sessions/:id/building-type` - Change building type
/// - `PUT /api/dashboard/sessions/:id/answers` - Submit answers
/// - `GET /api/dashboard/sessions/:id/score` - Score breakdown
/// - `GET /api/dashboard/sessions/:id/tips` - Improvement tips
/// - `GET /api/dashboard/sessions/:id/report` - Infographic data
/// - `POST /api/dashboard/sessions/:id/pledge` - Make a pledge
/// - `GET /api/dashboard/sessions/:id/certificate.svg` - Download certificate
pub fn dashboard_router() -> Router<DashboardAppState> {
    Router::new()
        .route("/api/dashboard/questionnaire", get(get_questionnaire))
        .route("/api/dashboard/materials", get(compare_materials))
        .route("/api/dashboard/sessions", post(create_session))
        .route("/api/dashboard/sessions/:id", get(get_session))
        .route("/api/dashboard/sessions/:id/building-type", put(set_building_type))
        .route("/api/dashboard/sessions/:id/answers", put(submit_answers))
        .route("/api/dashboard/sessions/:id/score", get(get_score))
        .route("/api/dashboard/sessions/:id/tips", get(get_tips))
        .route("/api/dashboard/sessions/:id/report", get(get_report))
        .route("/api/dashboard/sessions/:id/pledge", post(make_pledge))
        .route("/api/dashboard/sessions/:id/certificate.svg", get(download_certificate))
}
