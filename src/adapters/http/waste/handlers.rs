//! HTTP handlers for waste endpoints.

use std::sync::Arc;

use axum::extract::{Json, Multipart, State};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::{
    ClassifyWasteCommand, ClassifyWasteError, ClassifyWasteHandler, PredictWasteCommand,
    PredictWasteError, PredictWasteHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::image::ImageError;
use crate::domain::waste::{WasteGuidance, WastePrediction, NO_IMAGE_MESSAGE};
use crate::ports::ClassifierError;

use super::dto::{PredictRequest, WASTE_IMAGE_FIELD};

/// Shared state for waste routes.
#[derive(Clone)]
pub struct WasteAppState {
    pub classify: Arc<ClassifyWasteHandler>,
    pub predict: Arc<PredictWasteHandler>,
}

impl WasteAppState {
    pub fn new(classify: ClassifyWasteHandler, predict: PredictWasteHandler) -> Self {
        Self {
            classify: Arc::new(classify),
            predict: Arc::new(predict),
        }
    }
}

impl From<ClassifyWasteError> for ApiError {
    fn from(err: ClassifyWasteError) -> Self {
        let message = err.user_message();
        match err {
            ClassifyWasteError::Image(ImageError::UnsupportedExtension) => {
                ApiError::bad_request(ErrorCode::UnsupportedMediaType, message)
            }
            ClassifyWasteError::Image(_) => {
                ApiError::bad_request(ErrorCode::ImageDecodeFailed, message)
            }
            ClassifyWasteError::Vision(_) => {
                ApiError::BadGateway(ErrorResponse::new(ErrorCode::VisionProviderError, message))
            }
        }
    }
}

impl From<PredictWasteError> for ApiError {
    fn from(err: PredictWasteError) -> Self {
        let message = err.to_string();
        match err {
            PredictWasteError::Image(ImageError::InvalidBase64(_)) => {
                ApiError::bad_request(ErrorCode::InvalidFormat, message)
            }
            PredictWasteError::Image(_) => {
                ApiError::bad_request(ErrorCode::ImageDecodeFailed, message)
            }
            PredictWasteError::Classifier(ClassifierError::Unavailable) => {
                ApiError::ServiceUnavailable(ErrorResponse::new(
                    ErrorCode::ClassifierUnavailable,
                    message,
                ))
            }
            PredictWasteError::Classifier(_) => {
                ApiError::Internal(ErrorResponse::new(ErrorCode::ClassifierError, message))
            }
        }
    }
}

/// POST /api/waste/classify (multipart, field `waste_image`)
pub async fn classify_waste(
    State(state): State<WasteAppState>,
    mut multipart: Multipart,
) -> Result<Json<WasteGuidance>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(WASTE_IMAGE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some(ClassifyWasteCommand {
            filename,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let cmd = upload
        .filter(|cmd| !cmd.filename.is_empty())
        .ok_or_else(|| ApiError::bad_request(ErrorCode::MissingUpload, NO_IMAGE_MESSAGE))?;

    Ok(Json(state.classify.handle(cmd).await?))
}

/// POST /api/waste/predict
pub async fn predict_waste(
    State(state): State<WasteAppState>,
    body: Option<Json<PredictRequest>>,
) -> Result<Json<WastePrediction>, ApiError> {
    let image = body
        .and_then(|Json(req)| req.image)
        .ok_or_else(|| ApiError::bad_request(ErrorCode::MissingUpload, "No image provided"))?;

    let prediction = state.predict.handle(PredictWasteCommand { image }).await?;
    Ok(Json(prediction))
}
