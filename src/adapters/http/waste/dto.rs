//! Data Transfer Objects for waste endpoints.

use serde::Deserialize;

/// Multipart field carrying the photo for disposal guidance.
pub const WASTE_IMAGE_FIELD: &str = "waste_image";

/// Body of the label predictor: a data URL or bare base64 string.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub image: Option<String>,
}
