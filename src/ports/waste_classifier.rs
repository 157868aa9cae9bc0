//! Waste Classifier Port - Interface for the pre-trained waste image model.

use async_trait::async_trait;

/// Port for image classification into waste classes.
#[async_trait]
pub trait WasteClassifier: Send + Sync {
    /// Classifies encoded image bytes (PNG, JPEG, ...).
    async fn classify(&self, image: &[u8]) -> Result<Prediction, ClassifierError>;
}

/// Winning class and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class_id: u32,
    pub confidence: f32,
}

impl Prediction {
    /// Index and value of the highest score, `None` for an empty slice.
    pub fn argmax(scores: &[f32]) -> Option<Self> {
        scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, s)| s.is_finite())
            .fold(None, |best: Option<(usize, f32)>, (i, s)| match best {
                Some((_, b)) if b >= s => best,
                _ => Some((i, s)),
            })
            .map(|(i, s)| Self {
                class_id: i as u32,
                confidence: s,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// No classifier endpoint is configured.
    #[error("classifier not configured")]
    Unavailable,

    #[error("model server returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}
