//! HTTP routes for waste endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{classify_waste, predict_waste, WasteAppState};

/// Routes:
/// - `POST /api/waste/classify` - Disposal guidance from the vision model
/// - `POST /api/waste/predict` - Class label from the waste classifier
pub fn waste_router() -> Router<WasteAppState> {
    Router::new()
        .route("/api/waste/classify", post(classify_waste))
        .route("/api/waste/predict", post(predict_waste))
}
