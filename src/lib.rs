//! Green Guardian - Sustainability Dashboard and Image Guidance Service
//!
//! This crate scores a building's sustainability questionnaire, produces
//! tips, reports and pledge certificates, estimates carbon footprints, and
//! wraps a hosted vision model and a waste classifier behind a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use adapters::http::{api_router, DashboardAppState, RoomAppState, WasteAppState};
use config::ServerConfig;

/// Builds the full application router with its middleware stack.
///
/// Without configured origins CORS is permissive, matching local use.
pub fn build_router(
    server: &ServerConfig,
    dashboard: DashboardAppState,
    waste: WasteAppState,
    room: RoomAppState,
) -> Router {
    api_router(dashboard, waste, room)
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
