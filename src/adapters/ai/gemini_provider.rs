//! Gemini Provider - Implementation of VisionProvider for Google's Gemini API.
//!
//! Sends one `generateContent` request per call with the prompt and the
//! image inlined as base64. The key travels in the `x-goog-api-key` header
//! so it never appears in request URLs or the errors reqwest builds from them.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = GeminiVisionProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{VisionError, VisionProvider, VisionRequest, VisionResponse};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiVisionProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiVisionProvider {
    /// # Errors
    ///
    /// `Network` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, VisionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VisionError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn to_gemini_request(request: &VisionRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart::Text {
                        text: request.prompt.clone(),
                    },
                    GeminiPart::InlineData {
                        inline_data: InlineData {
                            mime_type: request.image.mime.clone(),
                            data: request.image.to_base64(),
                        },
                    },
                ],
            }],
        }
    }

    async fn send_request(&self, request: &VisionRequest) -> Result<Response, VisionError> {
        let body = Self::to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header(API_KEY_HEADER, self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    VisionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    VisionError::Network(format!("Connection failed: {}", e))
                } else {
                    VisionError::Network(e.to_string())
                }
            })
    }

    async fn handle_response_status(response: Response) -> Result<Response, VisionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::classify_error(status.as_u16(), body))
    }

    /// Maps a failed status and body to an error.
    fn classify_error(status: u16, body: String) -> VisionError {
        if body.contains("API_KEY_INVALID") {
            VisionError::InvalidApiKey(body)
        } else {
            VisionError::Http { status, body }
        }
    }

    /// Pulls `candidates[0].content.parts[0].text` out of a response body.
    fn extract_text(body: &GeminiResponse) -> Result<String, VisionError> {
        body.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.clone())
            .ok_or_else(|| VisionError::UnexpectedResponse("missing candidate text".to_string()))
    }
}

#[async_trait]
impl VisionProvider for GeminiVisionProvider {
    async fn analyze(&self, request: VisionRequest) -> Result<VisionResponse, VisionError> {
        tracing::debug!(
            model = %self.config.model,
            mime = %request.image.mime,
            bytes = request.image.bytes.len(),
            "Sending Gemini generateContent request"
        );

        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| VisionError::UnexpectedResponse(e.to_string()))?;

        let text = Self::extract_text(&body)?;
        Ok(VisionResponse {
            text,
            model: self.config.model.clone(),
        })
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gemini wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::ImageData;

    fn provider() -> GeminiVisionProvider {
        GeminiVisionProvider::new(GeminiConfig::new("test-key")).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-pro-vision")
            .with_base_url("http://localhost:9999/v1beta/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gemini-pro-vision");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn generate_url_includes_model() {
        assert_eq!(
            provider().generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let local = GeminiVisionProvider::new(
            GeminiConfig::new("k").with_base_url("http://localhost:9999/v1beta/"),
        )
        .unwrap();
        assert_eq!(
            local.generate_url(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_inlines_prompt_and_image() {
        let request = VisionRequest::new("Describe", ImageData::new(vec![1, 2, 3], "image/png"));
        let json = serde_json::to_value(GeminiVisionProvider::to_gemini_request(&request)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        {"text": "Describe"},
                        {"inline_data": {"mime_type": "image/png", "data": "AQID"}}
                    ]
                }]
            })
        );
    }

    #[test]
    fn extract_text_reads_first_candidate() {
        let body: GeminiResponse = serde_json::from_str(
            r###"{"candidates":[{"content":{"parts":[{"text":"## Plastic bottle"}],"role":"model"}}]}"###,
        )
        .unwrap();
        assert_eq!(
            GeminiVisionProvider::extract_text(&body).unwrap(),
            "## Plastic bottle"
        );
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        let body: GeminiResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(matches!(
            GeminiVisionProvider::extract_text(&body),
            Err(VisionError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn invalid_key_body_is_classified() {
        let body = r#"{"error":{"code":400,"status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#;
        assert!(GeminiVisionProvider::classify_error(400, body.to_string()).is_invalid_key());
        assert_eq!(
            GeminiVisionProvider::classify_error(503, "busy".to_string()),
            VisionError::Http {
                status: 503,
                body: "busy".to_string()
            }
        );
    }

    #[tokio::test]
    async fn connection_errors_do_not_expose_the_key() {
        let key = "SUPERSECRETKEY123";
        let provider = GeminiVisionProvider::new(
            GeminiConfig::new(key)
                .with_base_url("http://127.0.0.1:1/v1beta")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        let request = VisionRequest::new("Describe", ImageData::new(vec![1, 2, 3], "image/png"));

        let err = provider.analyze(request).await.unwrap_err();

        assert!(matches!(err, VisionError::Network(_) | VisionError::Timeout { .. }));
        assert!(!err.to_string().contains(key), "key leaked: {}", err);
        assert!(!format!("{:?}", err).contains(key));
    }

    #[test]
    fn model_reports_configured_name() {
        assert_eq!(provider().model(), "gemini-2.5-flash");
    }
}
