//! HTTP routes for the room analyzer.

use axum::routing::post;
use axum::Router;

use super::handlers::{identify_room, RoomAppState};

/// Routes:
/// - `POST /api/room/identify` - Analyse one or more room photos
pub fn room_router() -> Router<RoomAppState> {
    Router::new().route("/api/room/identify", post(identify_room))
}
