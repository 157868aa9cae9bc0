//! PredictWasteHandler - Labels a base64 image with the waste classifier.

use std::sync::Arc;

use crate::domain::image::{self, ImageError};
use crate::domain::waste::{WasteLabels, WastePrediction};
use crate::ports::{ClassifierError, WasteClassifier};

/// Command carrying a data URL or bare base64 payload.
#[derive(Debug, Clone)]
pub struct PredictWasteCommand {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictWasteError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("Prediction failed: {0}")]
    Classifier(#[from] ClassifierError),
}

pub struct PredictWasteHandler {
    classifier: Option<Arc<dyn WasteClassifier>>,
    labels: Arc<WasteLabels>,
}

impl PredictWasteHandler {
    /// `classifier` is `None` when no model server is configured; every
    /// prediction then fails with `ClassifierError::Unavailable`.
    pub fn new(classifier: Option<Arc<dyn WasteClassifier>>, labels: Arc<WasteLabels>) -> Self {
        Self { classifier, labels }
    }

    pub fn is_available(&self) -> bool {
        self.classifier.is_some()
    }

    pub async fn handle(&self, cmd: PredictWasteCommand) -> Result<WastePrediction, PredictWasteError> {
        let bytes = image::decode_base64_image(&cmd.image)?;
        image::sniff_image(&bytes)?;

        let classifier = self.classifier.as_ref().ok_or(ClassifierError::Unavailable)?;
        let prediction = classifier.classify(&bytes).await.map_err(|err| {
            tracing::warn!(error = %err, "Waste classifier failed");
            err
        })?;

        Ok(WastePrediction {
            class_id: prediction.class_id,
            prediction_text: self.labels.label(prediction.class_id).to_string(),
            confidence: Some(prediction.confidence),
        })
    }
}
