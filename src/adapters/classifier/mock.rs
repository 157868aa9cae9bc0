//! Mock Waste Classifier for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ClassifierError, Prediction, WasteClassifier};

/// Returns queued results in order, then a fixed fallback prediction.
#[derive(Debug, Clone)]
pub struct MockWasteClassifier {
    results: Arc<Mutex<VecDeque<Result<Prediction, ClassifierError>>>>,
    fallback: Prediction,
    call_count: Arc<Mutex<usize>>,
}

impl Default for MockWasteClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWasteClassifier {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Prediction {
                class_id: 0,
                confidence: 1.0,
            },
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Always predicts `class_id` once the queue is empty.
    pub fn predicting(class_id: u32) -> Self {
        Self {
            fallback: Prediction {
                class_id,
                confidence: 1.0,
            },
            ..Self::new()
        }
    }

    pub fn with_prediction(self, class_id: u32, confidence: f32) -> Self {
        self.push(Ok(Prediction {
            class_id,
            confidence,
        }));
        self
    }

    pub fn with_error(self, error: ClassifierError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|c| *c).unwrap_or(0)
    }

    fn push(&self, result: Result<Prediction, ClassifierError>) {
        if let Ok(mut queue) = self.results.lock() {
            queue.push_back(result);
        }
    }
}

#[async_trait]
impl WasteClassifier for MockWasteClassifier {
    async fn classify(&self, _image: &[u8]) -> Result<Prediction, ClassifierError> {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }
        self.results
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(Ok(self.fallback))
    }
}
