//! ClassifyWasteHandler - Disposal guidance for an uploaded waste photo.
//!
//! The vision model answers in markdown; the handler renders it to HTML and
//! echoes the photo back as base64 so the page can show both.

use std::sync::Arc;

use crate::domain::image::{self, ImageData, ImageError};
use crate::domain::waste::{guidance_failure_message, WasteGuidance, INVALID_KEY_MESSAGE, WASTE_PROMPT};
use crate::ports::{MarkupRenderer, VisionError, VisionProvider, VisionRequest};

/// Command carrying one uploaded file.
#[derive(Debug, Clone)]
pub struct ClassifyWasteCommand {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyWasteError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Vision(#[from] VisionError),
}

impl ClassifyWasteError {
    /// Message shown to the user in place of the guidance.
    pub fn user_message(&self) -> String {
        match self {
            ClassifyWasteError::Image(ImageError::UnsupportedExtension) => {
                ImageError::UnsupportedExtension.to_string()
            }
            ClassifyWasteError::Vision(err) if err.is_invalid_key() => {
                INVALID_KEY_MESSAGE.to_string()
            }
            other => guidance_failure_message(&other.to_string()),
        }
    }
}

pub struct ClassifyWasteHandler {
    vision: Arc<dyn VisionProvider>,
    renderer: Arc<dyn MarkupRenderer>,
}

impl ClassifyWasteHandler {
    pub fn new(vision: Arc<dyn VisionProvider>, renderer: Arc<dyn MarkupRenderer>) -> Self {
        Self { vision, renderer }
    }

    /// # Errors
    ///
    /// - `Image(UnsupportedExtension)` for a filename outside the allow-list
    /// - `Image(NotAnImage)` when the bytes carry no image signature
    /// - `Vision` for any provider failure
    pub async fn handle(&self, cmd: ClassifyWasteCommand) -> Result<WasteGuidance, ClassifyWasteError> {
        image::check_allowed_extension(&cmd.filename)?;
        let mime = image::sniff_image(&cmd.bytes)?;

        let image = ImageData::new(cmd.bytes, mime);
        let image_b64 = image.to_base64();

        let response = self
            .vision
            .analyze(VisionRequest::new(WASTE_PROMPT, image))
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, model = self.vision.model(), "Waste guidance request failed");
                err
            })?;

        Ok(WasteGuidance {
            html: self.renderer.to_html(&response.text),
            image_b64,
            mime: mime.to_string(),
        })
    }
}
