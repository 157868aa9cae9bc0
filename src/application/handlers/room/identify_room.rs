//! IdentifyRoomHandler - Sustainability analysis for uploaded room photos.
//!
//! Each photo is analysed independently and in order. A failure for one
//! photo is reported in its own result and never aborts the batch.

use std::sync::Arc;

use crate::domain::image::{self, ImageData, ImageError};
use crate::domain::room::{RoomAnalysis, RoomImageResult, ROOM_PROMPT};
use crate::ports::{VisionProvider, VisionRequest};

/// One uploaded file as received.
#[derive(Debug, Clone)]
pub struct RoomUpload {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct IdentifyRoomCommand {
    pub uploads: Vec<RoomUpload>,
}

pub struct IdentifyRoomHandler {
    vision: Arc<dyn VisionProvider>,
}

impl IdentifyRoomHandler {
    pub fn new(vision: Arc<dyn VisionProvider>) -> Self {
        Self { vision }
    }

    pub async fn handle(&self, cmd: IdentifyRoomCommand) -> Vec<RoomImageResult> {
        let mut results = Vec::with_capacity(cmd.uploads.len());
        for (index, upload) in cmd.uploads.into_iter().enumerate() {
            results.push(self.analyse_one(index, upload).await);
        }
        results
    }

    async fn analyse_one(&self, index: usize, upload: RoomUpload) -> RoomImageResult {
        let raw_name = upload
            .filename
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("image_{}.jpg", index));
        let filename = image::sanitize_filename(&raw_name);
        if filename.is_empty() {
            return RoomImageResult::failed(index, None, "Empty filename.");
        }
        if upload.bytes.is_empty() {
            return RoomImageResult::failed(index, Some(filename), ImageError::Empty.to_string());
        }

        let ext = image::extension(&filename).unwrap_or_else(|| "jpg".to_string());
        let request = VisionRequest::new(
            ROOM_PROMPT,
            ImageData::new(upload.bytes, image::mime_for_extension(&ext)),
        );

        let text = match self.vision.analyze(request).await {
            Ok(response) => response.text,
            Err(err) => {
                tracing::warn!(index, filename = %filename, error = %err, "Room analysis request failed");
                return RoomImageResult::failed(index, Some(filename), err.to_string());
            }
        };

        match RoomAnalysis::from_model_text(&text) {
            Ok(analysis) => RoomImageResult::analysed(index, filename, analysis),
            Err(err) => {
                tracing::warn!(index, filename = %filename, error = %err, "Room analysis was not valid JSON");
                RoomImageResult::failed(index, Some(filename), err.to_string())
            }
        }
    }
}
