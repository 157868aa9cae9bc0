//! Data Transfer Objects for room analyzer endpoints.

use serde::Serialize;

use crate::domain::room::RoomImageResult;

/// Multipart field carrying one or more room photos.
pub const IMAGES_FIELD: &str = "images";

pub const NO_IMAGES_MESSAGE: &str = "No images provided. Use field name 'images'.";

#[derive(Debug, Clone, Serialize)]
pub struct IdentifyRoomResponse {
    pub results: Vec<RoomImageResult>,
}
