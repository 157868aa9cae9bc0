//! Waste HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WasteAppState;
pub use routes::waste_router;
