//! HTTP handlers for the room analyzer.

use std::sync::Arc;

use axum::extract::{Json, Multipart, State};

use crate::adapters::http::error::ApiError;
use crate::application::{IdentifyRoomCommand, IdentifyRoomHandler, RoomUpload};
use crate::domain::foundation::ErrorCode;

use super::dto::{IdentifyRoomResponse, IMAGES_FIELD, NO_IMAGES_MESSAGE};

#[derive(Clone)]
pub struct RoomAppState {
    pub identify: Arc<IdentifyRoomHandler>,
}

impl RoomAppState {
    pub fn new(identify: IdentifyRoomHandler) -> Self {
        Self {
            identify: Arc::new(identify),
        }
    }
}

/// POST /api/room/identify (multipart, repeated field `images`)
pub async fn identify_room(
    State(state): State<RoomAppState>,
    mut multipart: Multipart,
) -> Result<Json<IdentifyRoomResponse>, ApiError> {
    let mut uploads = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGES_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;
        uploads.push(RoomUpload {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    if uploads.is_empty() {
        return Err(ApiError::bad_request(ErrorCode::MissingUpload, NO_IMAGES_MESSAGE));
    }

    tracing::debug!(count = uploads.len(), "Analysing room photos");
    let results = state.identify.handle(IdentifyRoomCommand { uploads }).await;
    Ok(Json(IdentifyRoomResponse { results }))
}
