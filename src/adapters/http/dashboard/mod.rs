//! Dashboard HTTP adapter module.
//!
//! Questionnaire, scoring, tips, report, materials and pledge endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DashboardAppState;
pub use routes::dashboard_router;
