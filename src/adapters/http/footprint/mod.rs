//! Footprint HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::footprint_router;
