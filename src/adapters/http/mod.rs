//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter with `dto`, `handlers` and `routes`;
//! [`api_router`] merges them into one application router.

pub mod dashboard;
pub mod error;
pub mod footprint;
pub mod health;
pub mod room;
pub mod waste;

use axum::Router;

pub use dashboard::{dashboard_router, DashboardAppState};
pub use error::{ApiError, ErrorResponse};
pub use footprint::footprint_router;
pub use health::health_router;
pub use room::{room_router, RoomAppState};
pub use waste::{waste_router, WasteAppState};

/// All feature routers with their state applied.
pub fn api_router(dashboard: DashboardAppState, waste: WasteAppState, room: RoomAppState) -> Router {
    Router::new()
        .merge(health_router())
        .merge(footprint_router())
        .merge(dashboard_router().with_state(dashboard))
        .merge(waste_router().with_state(waste))
        .merge(room_router().with_state(room))
}
