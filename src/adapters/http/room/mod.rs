//! Room analyzer HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RoomAppState;
pub use routes::room_router;
