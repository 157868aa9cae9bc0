//! Remote Waste Classifier - Calls a model server's REST predict endpoint.
//!
//! The request carries the encoded image as base64 under the `b64` key so
//! the server can decode and resize it with its own preprocessing:
//!
//! ```text
//! POST {endpoint}
//! {"instances": [{"b64": "<base64>"}]}
//!
//! 200 OK
//! {"predictions": [[0.01, 0.93, ...]]}
//! ```
//!
//! The winning class is the argmax of the first prediction row.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ClassifierError, Prediction, WasteClassifier};

/// Configuration for the remote classifier.
#[derive(Debug, Clone)]
pub struct RemoteClassifierConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl RemoteClassifierConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct RemoteWasteClassifier {
    config: RemoteClassifierConfig,
    client: Client,
}

impl RemoteWasteClassifier {
    pub fn new(config: RemoteClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifierError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn to_predict_request(image: &[u8]) -> PredictRequest {
        PredictRequest {
            instances: vec![Instance {
                b64: STANDARD.encode(image),
            }],
        }
    }

    async fn send_request(&self, image: &[u8]) -> Result<Response, ClassifierError> {
        self.client
            .post(&self.config.endpoint)
            .json(&Self::to_predict_request(image))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ClassifierError::Network(format!("Connection failed: {}", e))
                } else {
                    ClassifierError::Network(e.to_string())
                }
            })
    }

    async fn handle_response_status(response: Response) -> Result<Response, ClassifierError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClassifierError::Http {
            status: status.as_u16(),
            body,
        })
    }

    fn pick_prediction(body: &PredictResponse) -> Result<Prediction, ClassifierError> {
        let row = body
            .predictions
            .first()
            .ok_or_else(|| ClassifierError::InvalidResponse("no predictions".to_string()))?;

        Prediction::argmax(row)
            .ok_or_else(|| ClassifierError::InvalidResponse("empty prediction row".to_string()))
    }
}

#[async_trait]
impl WasteClassifier for RemoteWasteClassifier {
    async fn classify(&self, image: &[u8]) -> Result<Prediction, ClassifierError> {
        tracing::debug!(
            endpoint = %self.config.endpoint,
            bytes = image.len(),
            "Sending classifier predict request"
        );

        let response = self.send_request(image).await?;
        let response = Self::handle_response_status(response).await?;

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        Self::pick_prediction(&body)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
}

#[derive(Debug, Serialize)]
struct Instance {
    b64: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Vec<f32>>,
}
