//! Mock Vision Provider for testing.
//!
//! Returns queued responses in order and records every request so tests can
//! assert on prompts and MIME types. With nothing queued it echoes a fixed
//! default text.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockVisionProvider::new()
//!     .with_response("## Glass jar")
//!     .with_error(VisionError::Network("reset".into()));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{VisionError, VisionProvider, VisionRequest, VisionResponse};

const MOCK_MODEL: &str = "mock-vision-1";

/// Mock vision provider.
#[derive(Debug, Clone)]
pub struct MockVisionProvider {
    responses: Arc<Mutex<VecDeque<Result<String, VisionError>>>>,
    default_text: String,
    delay: Duration,
    calls: Arc<Mutex<Vec<VisionRequest>>>,
}

impl Default for MockVisionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVisionProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default_text: "Mock vision response".to_string(),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: VisionError) -> Self {
        self.push(Err(error));
        self
    }

    /// Text returned once the queue is empty.
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<VisionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn push(&self, response: Result<String, VisionError>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    fn next_response(&self) -> Result<String, VisionError> {
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Ok(self.default_text.clone()))
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    async fn analyze(&self, request: VisionRequest) -> Result<VisionResponse, VisionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response().map(|text| VisionResponse {
            text,
            model: MOCK_MODEL.to_string(),
        })
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }
}
