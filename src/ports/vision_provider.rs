//! Vision Provider Port - Interface for hosted image-understanding models.
//!
//! The waste guidance and room analyzer features send one prompt plus one
//! image and get free text back. Adapters translate to a concrete API
//! (Gemini `generateContent`) or serve canned responses in tests.

use async_trait::async_trait;

use crate::domain::image::ImageData;

/// Port for prompt + image completions.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Sends the request and returns the model's text.
    async fn analyze(&self, request: VisionRequest) -> Result<VisionResponse, VisionError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// A single prompt with one inline image.
#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub prompt: String,
    pub image: ImageData,
}

impl VisionRequest {
    pub fn new(prompt: impl Into<String>, image: ImageData) -> Self {
        Self {
            prompt: prompt.into(),
            image,
        }
    }
}

/// Text produced by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionResponse {
    pub text: String,
    pub model: String,
}

/// Vision provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisionError {
    /// The API rejected the configured key.
    #[error("API_KEY_INVALID: {0}")]
    InvalidApiKey(String),

    /// Non-success HTTP status.
    #[error("{status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not have the expected shape.
    #[error("Unexpected response format from model: {0}")]
    UnexpectedResponse(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl VisionError {
    /// Whether the error came from a rejected API key.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, VisionError::InvalidApiKey(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_and_body() {
        let err = VisionError::Http {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "503: overloaded");
    }

    #[test]
    fn invalid_key_is_detected() {
        assert!(VisionError::InvalidApiKey("bad".into()).is_invalid_key());
        assert!(!VisionError::Network("reset".into()).is_invalid_key());
    }
}
